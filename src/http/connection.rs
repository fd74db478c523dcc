use bytes::BytesMut;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::activity;
use crate::http::parser::{decode_line, find_line_end, MAX_REQUEST_LINE};
use crate::http::request::Request;
use crate::http::responder::build_response;
use crate::http::writer::write_response;
use crate::store::ResourceStore;

/// One accepted connection, good for exactly one request.
pub struct Session<S> {
    stream: S,
    peer: SocketAddr,
    created: Instant,
    store: Arc<ResourceStore>,
    read_timeout: Duration,
    buffer: BytesMut,
    state: SessionState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingRequest,
    Closed,
}

impl<S> Session<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(
        stream: S,
        peer: SocketAddr,
        store: Arc<ResourceStore>,
        read_timeout: Duration,
    ) -> Self {
        Self {
            stream,
            peer,
            created: Instant::now(),
            store,
            read_timeout,
            buffer: BytesMut::with_capacity(1024),
            state: SessionState::AwaitingRequest,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run the exchange, then close the connection whatever the outcome.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = match self.state {
            SessionState::AwaitingRequest => self.exchange().await,
            SessionState::Closed => Ok(()),
        };
        self.state = SessionState::Closed;

        self.close().await;

        tracing::debug!(
            peer = %self.peer,
            elapsed_ms = self.created.elapsed().as_millis() as u64,
            "Session finished"
        );

        result
    }

    async fn exchange(&mut self) -> anyhow::Result<()> {
        let line = match timeout(self.read_timeout, self.read_request_line()).await {
            Ok(res) => res?,
            Err(_) => anyhow::bail!(
                "no request line within {}s",
                self.read_timeout.as_secs()
            ),
        };

        let Some(line) = line else {
            tracing::info!(peer = %self.peer, "Client disconnected before sending a request");
            return Ok(());
        };

        let request = Request::parse(&line);
        activity::request_received(self.peer, &request);

        let response = build_response(&request, &self.store).await?;
        let status = response.status;
        let content_length = response.content_length;

        write_response(&mut self.stream, response).await?;
        activity::response_sent(self.peer, status, content_length);

        Ok(())
    }

    /// Read up to and including the first `\n`.
    ///
    /// `Ok(None)` means the peer closed without sending anything. Bytes
    /// followed by EOF without a terminator still count as a line.
    pub async fn read_request_line(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            if let Some(end) = find_line_end(&self.buffer) {
                let raw = self.buffer.split_to(end + 1);
                return Ok(Some(decode_line(&raw)));
            }

            if self.buffer.len() >= MAX_REQUEST_LINE {
                anyhow::bail!("request line exceeds {} bytes", MAX_REQUEST_LINE);
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed connection
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let raw = self.buffer.split();
                return Ok(Some(decode_line(&raw)));
            }
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(peer = %self.peer, error = %e, "Error closing connection");
        }
    }
}
