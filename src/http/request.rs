use std::fmt;

use crate::http::parser::parse_request_line;

/// Request methods understood by the server.
///
/// Anything else, including a missing method token, lands in
/// `Unrecognized` and is answered with 501 Not Implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// DELETE - Remove a resource from the document root
    DELETE,
    /// OPTIONS - List the supported methods
    OPTIONS,
    /// Any other token, kept verbatim for logging and the 501 reply
    Unrecognized(String),
}

/// A request parsed from a single line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method
    pub method: Method,
    /// Server-relative target path (e.g. "/index.html"); absent on a
    /// malformed line
    pub target: Option<String>,
}

impl Method {
    /// Parses a method token.
    ///
    /// Matching is case-sensitive; unknown tokens are not an error.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Unrecognized("get".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "DELETE" => Method::DELETE,
            "OPTIONS" => Method::OPTIONS,
            other => Method::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::DELETE => "DELETE",
            Method::OPTIONS => "OPTIONS",
            Method::Unrecognized(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Request {
    /// Parses one request line. Never fails; see [`parse_request_line`].
    pub fn parse(line: &str) -> Self {
        parse_request_line(line)
    }

    /// Target path, or an empty string for a malformed line
    pub fn target_or_empty(&self) -> &str {
        self.target.as_deref().unwrap_or("")
    }
}
