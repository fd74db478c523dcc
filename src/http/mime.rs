//! Content-Type lookup from a fixed extension table.

pub const TEXT_HTML: &str = "text/html";

/// Extension of the last path segment, if it has one.
///
/// The final `.` only counts when it comes after the last separator, so
/// `/a.dir/file` has no extension.
pub fn extension(path: &str) -> Option<&str> {
    let dot = path.rfind('.')?;
    let separator = path.rfind(['/', '\\']);

    match separator {
        Some(sep) if sep > dot => None,
        _ => Some(&path[dot + 1..]),
    }
}

/// Content-Type for `path`, or `None` when the extension is not in the table
pub fn content_type_for(path: &str) -> Option<&'static str> {
    match extension(path)? {
        "html" => Some(TEXT_HTML),
        "gif" => Some("gif"),
        "jpg" => Some("jpeg"),
        "png" => Some("png"),
        _ => None,
    }
}
