//! WebSocket listener task.

use std::time::Duration;

use futures_util::StreamExt;
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

use crate::data::{epoch_ms, LiveEvent, LiveMessage};

/// Delay between connection attempts after a drop or failure.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Spawn the listener task for the given WebSocket URL.
///
/// Returns the event channel and the task handle; abort the handle at
/// teardown. The task also ends on its own once the receiver is
/// dropped.
pub fn spawn_listener(url: String, handle: &Handle) -> (mpsc::Receiver<LiveEvent>, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(64);
    let task = handle.spawn(run(url, tx));
    (rx, task)
}

async fn run(url: String, tx: mpsc::Sender<LiveEvent>) {
    loop {
        match connect_async(url.as_str()).await {
            Ok((mut stream, _)) => {
                info!("live channel connected: {url}");
                if tx.send(LiveEvent::Connected).await.is_err() {
                    return;
                }

                while let Some(frame) = stream.next().await {
                    match frame {
                        Ok(Message::Text(text)) => {
                            match serde_json::from_str::<Value>(text.as_str()) {
                                Ok(value) => {
                                    let message = LiveMessage::from_payload(value, epoch_ms());
                                    if tx.send(LiveEvent::Data(message)).await.is_err() {
                                        return;
                                    }
                                }
                                Err(e) => warn!("undecodable live payload: {e}"),
                            }
                        }
                        Ok(Message::Close(_)) => break,
                        // Binary and control frames are not data events
                        Ok(_) => {}
                        Err(e) => {
                            warn!("live channel error: {e}");
                            break;
                        }
                    }
                }

                info!("live channel disconnected: {url}");
                if tx.send(LiveEvent::Disconnected).await.is_err() {
                    return;
                }
            }
            Err(e) => {
                warn!("live connect failed: {e}");
            }
        }

        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::SinkExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn listener_reports_lifecycle_and_data() {
        let server = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();

        tokio::spawn(async move {
            let (socket, _) = server.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
            ws.send(Message::text(r#"{"type":"entry_created","data":{"id":1}}"#))
                .await
                .unwrap();
            ws.send(Message::text("not json")).await.unwrap();
            ws.send(Message::text(r#"{"type":"entry_deleted"}"#)).await.unwrap();
            ws.close(None).await.unwrap();
        });

        let (mut rx, task) = spawn_listener(format!("ws://{addr}"), &Handle::current());

        assert_eq!(rx.recv().await, Some(LiveEvent::Connected));

        match rx.recv().await {
            Some(LiveEvent::Data(message)) => {
                assert_eq!(message.kind.as_deref(), Some("entry_created"));
            }
            other => panic!("expected data event, got {other:?}"),
        }

        // The non-JSON frame is skipped; the next data event is the
        // deletion.
        match rx.recv().await {
            Some(LiveEvent::Data(message)) => {
                assert_eq!(message.kind.as_deref(), Some("entry_deleted"));
            }
            other => panic!("expected data event, got {other:?}"),
        }

        assert_eq!(rx.recv().await, Some(LiveEvent::Disconnected));

        task.abort();
    }
}
