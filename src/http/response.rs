use tokio::fs::File;

use crate::http::mime::TEXT_HTML;

const DOCTYPE: &str = "<!DOCTYPE HTML PUBLIC \"-//IETF//DTD HTML 2.0//EN\">";

/// Status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Payload that follows the header block.
#[derive(Debug)]
pub enum Body {
    /// Nothing is written after the header
    Empty,
    /// In-memory payload (generated HTML pages)
    Bytes(Vec<u8>),
    /// A resource streamed from the document root
    File(File),
}

/// A response ready to be written to a client.
///
/// `content_length` is what the header announces. For `Body::Bytes` it is
/// the buffer length; for `Body::File` it is the resource size; for
/// `Body::Empty` it may be non-zero (HEAD).
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    /// Omitted from the header when `None`
    pub content_type: Option<&'static str>,
    pub content_length: u64,
    pub body: Body,
}

impl Response {
    fn html(status: StatusCode, page: String) -> Self {
        Self {
            status,
            content_type: Some(TEXT_HTML),
            content_length: page.len() as u64,
            body: Body::Bytes(page.into_bytes()),
        }
    }

    /// 200 with the resource streamed as the body
    pub fn ok_file(content_type: Option<&'static str>, file: File, size: u64) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            content_length: size,
            body: Body::File(file),
        }
    }

    /// 200 describing a resource without sending it
    pub fn head(content_type: Option<&'static str>, size: u64) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            content_length: size,
            body: Body::Empty,
        }
    }

    /// 200 with no payload, sent after a DELETE
    pub fn deleted(content_type: Option<&'static str>) -> Self {
        Self::head(content_type, 0)
    }

    /// 200 with a page listing the supported methods
    pub fn options() -> Self {
        let page = format!(
            "{DOCTYPE}<html><head><title>Server-Supported Methods</title></head>\
             <body><h1>Methods served by this server</h1>\
             <p>HEAD</p><p>GET</p><p>DELETE</p><p>OPTIONS</p></body></html>"
        );
        Self::html(StatusCode::Ok, page)
    }

    /// 404 with a page naming the missing path
    pub fn not_found(target: &str) -> Self {
        let status = StatusCode::NotFound;
        let title = format!("{} {}", status.as_u16(), status.reason_phrase());
        let page = format!(
            "{DOCTYPE}<html><head><title>{title}</title></head>\
             <body><h1>{title}</h1>\
             <p>The requested URL {target} was not found on this server.</p></body></html>"
        );
        Self::html(status, page)
    }

    /// 501 with an empty body
    pub fn not_implemented() -> Self {
        Self {
            status: StatusCode::NotImplemented,
            content_type: Some(TEXT_HTML),
            content_length: 0,
            body: Body::Empty,
        }
    }

    pub fn has_body(&self) -> bool {
        !matches!(self.body, Body::Empty)
    }
}
