use anyhow::Context;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Status line and headers, terminated by the blank line
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    if let Some(content_type) = resp.content_type.filter(|t| !t.is_empty()) {
        buf.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
    }
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.content_length).as_bytes());

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Write the full response and flush. Returns the number of body bytes sent.
///
/// A streamed body is capped at `content_length`; a resource that yields
/// fewer bytes than announced fails the write.
pub async fn write_response<W>(stream: &mut W, resp: Response) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    stream
        .write_all(&serialize_head(&resp))
        .await
        .context("Failed to write response header")?;

    let sent = match resp.body {
        Body::Empty => 0,
        Body::Bytes(bytes) => {
            stream
                .write_all(&bytes)
                .await
                .context("Failed to write response body")?;
            bytes.len() as u64
        }
        Body::File(file) => {
            let mut limited = file.take(resp.content_length);
            let copied = tokio::io::copy(&mut limited, stream)
                .await
                .context("Failed to stream resource")?;

            if copied != resp.content_length {
                anyhow::bail!(
                    "resource shrank while streaming: sent {} of {} bytes",
                    copied,
                    resp.content_length
                );
            }
            copied
        }
    };

    stream.flush().await.context("Failed to flush response")?;
    Ok(sent)
}
