use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Session;
use crate::server::admission::Admission;
use crate::store::ResourceStore;

/// Pause after a failed accept so a persistent error doesn't spin the loop
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// The accept loop and everything sessions share.
pub struct Server {
    listener: TcpListener,
    admission: Arc<Admission>,
    store: Arc<ResourceStore>,
    read_timeout: Duration,
}

impl Server {
    /// Bind the listening socket. Failure here is fatal to the process.
    pub async fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr = cfg.server.socket_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(
            "Listening on {} (root {}, max {} sessions)",
            listener.local_addr()?,
            cfg.document_root.display(),
            cfg.server.max_concurrent
        );

        Ok(Self {
            listener,
            admission: Admission::new(cfg.server.max_concurrent),
            store: Arc::new(ResourceStore::new(&cfg.document_root)),
            read_timeout: cfg.server.read_timeout(),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn admission(&self) -> Arc<Admission> {
        Arc::clone(&self.admission)
    }

    /// Accept forever. Neither accept errors nor session errors end the loop.
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::error!("Accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            let Some(permit) = self.admission.try_admit() else {
                tracing::warn!(
                    peer = %peer,
                    active = self.admission.active(),
                    max = self.admission.max(),
                    "Session limit reached, closing connection"
                );
                drop(socket);
                continue;
            };

            info!("Accepted connection from {}", peer);

            let store = Arc::clone(&self.store);
            let read_timeout = self.read_timeout;
            tokio::spawn(async move {
                let _permit = permit;
                let session = Session::new(socket, peer, store, read_timeout);
                if let Err(e) = session.run().await {
                    tracing::error!("Connection error from {}: {:#}", peer, e);
                }
            });
        }
    }
}

/// Bind on the configured port and serve the document root until the
/// process stops.
pub async fn serve(cfg: &Config) -> anyhow::Result<()> {
    Server::bind(cfg).await?.run().await
}
