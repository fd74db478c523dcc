//! Activity log
//!
//! Operator output goes to stderr. When a log path is configured, the same
//! events are appended, without ANSI colouring, to that file.

use anyhow::Context;
use std::fs::OpenOptions;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::http::request::Request;
use crate::http::response::StatusCode;

/// Install the global subscriber.
pub fn init(log_path: Option<&Path>) -> anyhow::Result<()> {
    let file_layer = match log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(LevelFilter::INFO)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

pub fn request_received(peer: SocketAddr, req: &Request) {
    tracing::info!(
        target: "activity",
        peer = %peer,
        method = %req.method,
        path = req.target_or_empty(),
        "Request received"
    );
}

pub fn response_sent(peer: SocketAddr, status: StatusCode, content_length: u64) {
    tracing::info!(
        target: "activity",
        peer = %peer,
        status = status.as_u16(),
        reason = status.reason_phrase(),
        content_length,
        "Response sent"
    );
}

pub fn deletion(target: &str, removed: bool) {
    if removed {
        tracing::warn!(target: "activity", path = target, "Resource deleted");
    } else {
        tracing::warn!(target: "activity", path = target, "Resource could not be deleted");
    }
}
