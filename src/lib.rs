//! docserve - Concurrent Document Server
//!
//! Serves files from a document root over a one-line, one-request text
//! protocol with GET, HEAD, DELETE and OPTIONS.

pub mod activity;
pub mod cli;
pub mod config;
pub mod http;
pub mod server;
pub mod store;
