//! JIRA Cloud REST helper
//!
//! Composes authenticated Issue API requests with injection-safe route
//! interpolation and minimal ADF comment bodies.

pub mod auth;
pub mod client;
pub mod error;
pub mod request;
pub mod route;
pub mod types;

pub use client::{HttpTransport, JiraClient, Transport, TransportResponse};
pub use error::{Error, Result};
pub use types::*;
