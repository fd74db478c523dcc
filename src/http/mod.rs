//! Request/response protocol.
//!
//! A client sends a single line, `<METHOD> <PATH> [ignored...]`, and gets one
//! response back before the connection is closed. There is no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: the per-connection session driving one exchange
//! - **`parser`**: splits the request line into method and target
//! - **`request`**: the method enum and parsed request
//! - **`responder`**: maps a request onto a response via the resource store
//! - **`response`**: status codes, bodies and the fixed HTML pages
//! - **`writer`**: serializes and writes responses to the client
//! - **`mime`**: Content-Type detection based on file extensions
//!
//! # Session lifecycle
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← Read one line (bounded by the read timeout)
//!        └──────┬───────────┘
//!               │ line read / peer gone / I/O error
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Connection shut down on every path
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use docserve::http::connection::Session;
//! use docserve::store::ResourceStore;
//! use std::{sync::Arc, time::Duration};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!     let store = Arc::new(ResourceStore::new("./www"));
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let store = store.clone();
//!         tokio::spawn(async move {
//!             let session = Session::new(socket, peer, store, Duration::from_secs(30));
//!             if let Err(e) = session.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod responder;
pub mod response;
pub mod writer;
