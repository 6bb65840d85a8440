//! Error types for the JIRA REST helper

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid route template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid issue reference: {0:?}")]
    InvalidIssueRef(String),

    #[error("JIRA returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
