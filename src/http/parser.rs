use crate::http::request::{Method, Request};

/// Upper bound on the request line, terminator included
pub const MAX_REQUEST_LINE: usize = 8 * 1024;

/// Parse `<METHOD> <PATH> [ignored...]`.
///
/// Tokens are separated by runs of whitespace. A line with fewer than two
/// tokens is malformed: its method becomes `Unrecognized` (carrying the lone
/// token, or nothing) and it has no target.
pub fn parse_request_line(line: &str) -> Request {
    let mut parts = line.split_whitespace();

    let method_str = parts.next();
    let target = parts.next();

    match (method_str, target) {
        (Some(method), Some(target)) => Request {
            method: Method::parse(method),
            target: Some(target.to_string()),
        },
        (method, _) => Request {
            method: Method::Unrecognized(method.unwrap_or_default().to_string()),
            target: None,
        },
    }
}

/// Position of the first `\n` in `buf`, if any
pub fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}

/// Decode raw line bytes, dropping the terminator and a trailing `\r`
pub fn decode_line(raw: &[u8]) -> String {
    let mut line = raw;
    if let Some(stripped) = line.strip_suffix(b"\n") {
        line = stripped;
    }
    if let Some(stripped) = line.strip_suffix(b"\r") {
        line = stripped;
    }
    String::from_utf8_lossy(line).into_owned()
}
