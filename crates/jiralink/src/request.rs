//! Request composition for the JIRA Issue API
//!
//! Each operation produces a [`RequestDescriptor`] for a transport to
//! execute. Issue references are validated up front and reach the route
//! exclusively through a template slot; comment text travels as data inside
//! a serialized ADF document.

use crate::route::{BuiltRoute, RouteTemplate};
use crate::types::{AdfDocument, CommentBody, IssueRef};
use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully specified request: method, resolved route, headers and an
/// optional JSON body.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub route: BuiltRoute,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

/// GET the issue's summary field.
pub fn fetch_summary(issue: &str) -> Result<RequestDescriptor> {
    let issue = IssueRef::new(issue)?;
    let route = RouteTemplate::new(&["/rest/api/3/issue/", "?fields=summary"])
        .build(&[issue.as_str()])?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Ok(RequestDescriptor {
        method: Method::Get,
        route,
        headers,
        body: None,
    })
}

/// POST a single-paragraph comment onto the issue.
pub fn write_comment(issue: &str, comment: &str) -> Result<RequestDescriptor> {
    let issue = IssueRef::new(issue)?;
    let route =
        RouteTemplate::new(&["/rest/api/3/issue/", "/comment"]).build(&[issue.as_str()])?;

    let body = CommentBody {
        body: AdfDocument::paragraph(comment),
    };

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(RequestDescriptor {
        method: Method::Post,
        route,
        headers,
        body: Some(serde_json::to_string(&body)?),
    })
}
