//! Fetch dispatch: background gateway requests feeding the UI loop.
//!
//! Every fetch is an independent task spawned on the runtime; each
//! sends its result over one mpsc channel that the UI loop drains
//! between frames. Requests are never cancelled and carry no
//! generation tag, so with several in flight the last to resolve wins
//! - an accepted race (a stale slow response can briefly rewind a
//! panel).

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::debug;

use gatewatch_client::{ClientError, GatewayClient};
use gatewatch_types::{Event, HealthSnapshot, Host, Problem, Trigger};

/// A completed gateway fetch, tagged by resource.
#[derive(Debug)]
pub enum GatewayUpdate {
    Health(Result<HealthSnapshot, ClientError>),
    Events(Result<Vec<Event>, ClientError>),
    Problems(Result<Vec<Problem>, ClientError>),
    Triggers(Result<Vec<Trigger>, ClientError>),
    Hosts(Result<Vec<Host>, ClientError>),
}

/// Spawns gateway fetches and routes their results to the UI channel.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Arc<GatewayClient>,
    tx: mpsc::Sender<GatewayUpdate>,
    handle: Handle,
}

impl Fetcher {
    /// Create a fetcher and the channel the UI loop drains.
    pub fn new(client: GatewayClient, handle: Handle) -> (Self, mpsc::Receiver<GatewayUpdate>) {
        let (tx, rx) = mpsc::channel(16);
        (
            Self {
                client: Arc::new(client),
                tx,
                handle,
            },
            rx,
        )
    }

    pub fn spawn_health(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.health().await;
            if let Err(ref e) = result {
                debug!("health fetch failed: {e}");
            }
            let _ = tx.send(GatewayUpdate::Health(result)).await;
        });
    }

    pub fn spawn_events(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.events().await;
            if let Err(ref e) = result {
                debug!("events fetch failed: {e}");
            }
            let _ = tx.send(GatewayUpdate::Events(result)).await;
        });
    }

    pub fn spawn_problems(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.problems().await;
            if let Err(ref e) = result {
                debug!("problems fetch failed: {e}");
            }
            let _ = tx.send(GatewayUpdate::Problems(result)).await;
        });
    }

    /// Triggers optionally scoped to one host (the only server-side
    /// parameter the gateway accepts).
    pub fn spawn_triggers(&self, host: Option<String>) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.triggers(host.as_deref()).await;
            if let Err(ref e) = result {
                debug!("triggers fetch failed: {e}");
            }
            let _ = tx.send(GatewayUpdate::Triggers(result)).await;
        });
    }

    pub fn spawn_hosts(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let result = client.hosts().await;
            if let Err(ref e) = result {
                debug!("hosts fetch failed: {e}");
            }
            let _ = tx.send(GatewayUpdate::Hosts(result)).await;
        });
    }

    /// The gateway this fetcher talks to, for display.
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fetches against an unreachable gateway must surface as channel
    // updates carrying errors, never as panics or hangs.
    #[tokio::test]
    async fn failed_fetch_arrives_as_error_update() {
        // Reserved TEST-NET-1 address: connection will fail fast or
        // time out; either way an Err update must arrive.
        let client = GatewayClient::builder()
            .endpoint("http://192.0.2.1:1")
            .timeout(std::time::Duration::from_millis(250))
            .build();

        let (fetcher, mut rx) = Fetcher::new(client, Handle::current());
        fetcher.spawn_events();

        let update = rx.recv().await.expect("update should arrive");
        match update {
            GatewayUpdate::Events(result) => assert!(result.is_err()),
            other => panic!("unexpected update: {other:?}"),
        }
    }
}
