//! Storage event stream
//!
//! GET /api/events (WebSocket, session required)
//!
//! Server → dashboard:
//! - `{"type":"ready","identifier":"G1"}` once connected
//! - `{"type":"storage","area":"durable","key":"samia_stock_items_fnideq","kind":"set"}` per write
//! - `{"type":"resync","skipped":N}` when the listener fell behind; reload everything
//!
//! Dashboard → server: nothing but pongs and close frames.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::{Router, routing::get};
use futures::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::time::Duration;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::storage::StorageEvent;

const PING_INTERVAL: Duration = Duration::from_secs(30);

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/events", get(handle_events_ws))
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum EventMessage<'a> {
    Ready { identifier: &'a str },
    Storage(&'a StorageEvent),
    Resync { skipped: u64 },
}

/// GET /api/events
pub async fn handle_events_ws(
    State(state): State<ServerState>,
    CurrentUser(user): CurrentUser,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| events_session(socket, state, user.email))
}

async fn events_session(socket: WebSocket, state: ServerState, identifier: String) {
    let (mut sink, mut stream) = socket.split();
    let mut rx = state.subscribe();
    tracing::info!(identifier = %identifier, "Event stream connected");

    let ready = EventMessage::Ready {
        identifier: &identifier,
    };
    if send_message(&mut sink, &ready).await.is_err() {
        return;
    }

    let mut ping_interval = tokio::time::interval(PING_INTERVAL);
    ping_interval.tick().await; // skip immediate

    loop {
        tokio::select! {
            _ = ping_interval.tick() => {
                if sink.send(Message::Ping(vec![].into())).await.is_err() {
                    break;
                }
            }

            event = rx.recv() => {
                let msg = match &event {
                    Ok(event) => EventMessage::Storage(event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(identifier = %identifier, skipped, "Event listener lagged");
                        EventMessage::Resync { skipped: *skipped }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                };
                if send_message(&mut sink, &msg).await.is_err() {
                    break;
                }
            }

            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    tracing::info!(identifier = %identifier, "Event stream disconnected");
}

async fn send_message<S>(sink: &mut S, msg: &EventMessage<'_>) -> Result<(), ()>
where
    S: futures::Sink<Message, Error = axum::Error> + Unpin,
{
    let json = serde_json::to_string(msg).map_err(|_| ())?;
    sink.send(Message::Text(json.into())).await.map_err(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{StorageArea, StorageEventKind};

    #[test]
    fn messages_are_tagged() {
        let event = StorageEvent {
            area: StorageArea::Durable,
            key: "samia_cash_mdiq".into(),
            kind: StorageEventKind::Set,
        };
        let json = serde_json::to_value(EventMessage::Storage(&event)).unwrap();
        assert_eq!(json["type"], "storage");
        assert_eq!(json["key"], "samia_cash_mdiq");
        assert_eq!(json["kind"], "set");

        let json = serde_json::to_value(EventMessage::Resync { skipped: 3 }).unwrap();
        assert_eq!(json["type"], "resync");
        assert_eq!(json["skipped"], 3);
    }
}
