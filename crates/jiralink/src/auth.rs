//! JIRA authentication

use crate::Result;

/// HTTP Basic credentials for a JIRA Cloud site (account email + API token).
pub struct JiraAuth {
    email: String,
    api_token: String,
}

impl JiraAuth {
    pub fn new(email: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    /// Load the API token for `email` from the OS keyring.
    pub fn from_keyring(service: &str, email: &str) -> Result<Self> {
        let entry = keyring::Entry::new(service, email)?;
        let api_token = entry.get_password()?;
        Ok(Self {
            email: email.to_string(),
            api_token,
        })
    }

    /// Value for the `Authorization` header.
    pub fn basic_header(&self) -> String {
        use base64::Engine;
        let credentials = format!("{}:{}", self.email, self.api_token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn basic_header_encodes_email_and_token() {
        let auth = JiraAuth::new("moo@example.com", "s3cret");
        let header = auth.basic_header();
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(decoded, b"moo@example.com:s3cret");
    }
}
