//! Safe route construction for JIRA REST paths
//!
//! Dynamic values (issue keys, field names, free text) enter a route only
//! through interpolation slots and are percent-encoded before insertion.
//! Literal fragments authored by the caller are emitted verbatim, so the
//! `/`, `?` and `=` structure of a route always comes from the template.

use crate::{Error, Result};
use std::fmt;

/// A fully resolved route, ready to append to the site base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRoute(String);

impl BuiltRoute {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuiltRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A route pattern: trusted literal fragments with one untrusted value
/// interpolated between each adjacent pair.
#[derive(Debug, Clone)]
pub struct RouteTemplate<'a> {
    literals: &'a [&'a str],
}

impl<'a> RouteTemplate<'a> {
    pub fn new(literals: &'a [&'a str]) -> Self {
        Self { literals }
    }

    /// Interleave the literal fragments with the encoded values.
    ///
    /// Every reserved character in a value is escaped, so a value can never
    /// contribute path segments or query parameters of its own. An empty
    /// value still occupies its slot. Fails with [`Error::InvalidTemplate`]
    /// unless there is exactly one value per gap between literals.
    pub fn build(&self, values: &[&str]) -> Result<BuiltRoute> {
        if self.literals.len() != values.len() + 1 {
            return Err(Error::InvalidTemplate(format!(
                "{} literal fragment(s) cannot hold {} value(s)",
                self.literals.len(),
                values.len()
            )));
        }

        let mut route = String::new();
        for (i, literal) in self.literals.iter().enumerate() {
            route.push_str(literal);
            if let Some(value) = values.get(i) {
                route.push_str(&urlencoding::encode(value));
            }
        }
        Ok(BuiltRoute(route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaves_literals_and_values() {
        let template = RouteTemplate::new(&["/rest/api/3/issue/", "?fields=summary"]);
        let route = template.build(&["ABC-1"]).unwrap();
        assert_eq!(route.as_str(), "/rest/api/3/issue/ABC-1?fields=summary");
    }

    #[test]
    fn build_is_deterministic() {
        let template = RouteTemplate::new(&["/a/", "/b/", ""]);
        let first = template.build(&["x y", "z&w"]).unwrap();
        let second = template.build(&["x y", "z&w"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_slot_count_mismatch() {
        let template = RouteTemplate::new(&["/a/", "/b"]);
        assert!(matches!(
            template.build(&[]),
            Err(Error::InvalidTemplate(_))
        ));
        assert!(matches!(
            template.build(&["x", "y"]),
            Err(Error::InvalidTemplate(_))
        ));
    }

    #[test]
    fn delimiters_in_values_are_encoded() {
        let template = RouteTemplate::new(&["/rest/api/3/issue/", "?fields=summary"]);
        let route = template.build(&["a/b?c#d&e=f"]).unwrap();
        assert_eq!(
            route.as_str(),
            "/rest/api/3/issue/a%2Fb%3Fc%23d%26e%3Df?fields=summary"
        );
        // The slash count is exactly what the literals contributed.
        let literal_slashes = "/rest/api/3/issue/?fields=summary".matches('/').count();
        assert_eq!(route.as_str().matches('/').count(), literal_slashes);
    }

    #[test]
    fn query_values_cannot_introduce_parameters() {
        let template = RouteTemplate::new(&["/search?jql=", ""]);
        let route = template.build(&["key=ABC-1&os_destination=evil"]).unwrap();
        assert_eq!(
            route.as_str(),
            "/search?jql=key%3DABC-1%26os_destination%3Devil"
        );
    }

    #[test]
    fn empty_value_keeps_its_slot() {
        let template = RouteTemplate::new(&["/rest/api/3/issue/", "/comment"]);
        let route = template.build(&[""]).unwrap();
        assert_eq!(route.as_str(), "/rest/api/3/issue//comment");
    }

    #[test]
    fn literals_are_never_reencoded() {
        let template = RouteTemplate::new(&["/a?x=1&y=2#frag"]);
        let route = template.build(&[]).unwrap();
        assert_eq!(route.as_str(), "/a?x=1&y=2#frag");
    }
}
