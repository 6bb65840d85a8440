//! JIRA API types

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An issue id or key (e.g. `10001` or `ABC-123`), validated for use as a
/// single interpolated path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef(String);

impl IssueRef {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() || raw.contains('/') {
            return Err(Error::InvalidIssueRef(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issue payload returned by `GET /rest/api/3/issue/{key}?fields=summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueResponse {
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    pub summary: Option<String>,
}

/// Minimal Atlassian Document Format document, as used for comment bodies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub version: u32,
    pub content: Vec<AdfNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdfNode {
    Paragraph { content: Vec<AdfInline> },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdfInline {
    Text { text: String },
}

impl AdfDocument {
    /// A document holding one paragraph with `text` carried verbatim.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: "doc".to_string(),
            version: 1,
            content: vec![AdfNode::Paragraph {
                content: vec![AdfInline::Text { text: text.into() }],
            }],
        }
    }
}

/// Request body for `POST /rest/api/3/issue/{key}/comment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentBody {
    pub body: AdfDocument,
}
