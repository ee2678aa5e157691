//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, InboundEvent},
    infrastructure::dto::ClientEvent,
    ui::{
        dispatcher::{Dispatch, DispatchEvent},
        state::AppState,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: frames produced by the
/// game coordinator (via rx channel) are sent to this client's WebSocket connection.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

fn dispatch(state: &AppState, connection_id: ConnectionId, event: DispatchEvent) -> bool {
    let sent = state
        .dispatcher
        .send(Dispatch {
            connection_id,
            event,
        })
        .is_ok();
    if !sent {
        tracing::error!(
            "Dispatcher is gone, dropping event from connection '{}'",
            connection_id
        );
    }
    sent
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();

    // onConnect
    if !dispatch(&state, connection_id, DispatchEvent::Opened(tx)) {
        return;
    }

    let (sender, mut receiver) = socket.split();
    let state_clone = state.clone();

    // Spawn a task to receive events from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text from '{}': {}", connection_id, text);
                    let event = match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => InboundEvent::from(event),
                        Err(e) => {
                            tracing::warn!(
                                "Ignoring malformed frame from '{}': {}",
                                connection_id,
                                e
                            );
                            continue;
                        }
                    };
                    if !dispatch(&state_clone, connection_id, DispatchEvent::Inbound(event)) {
                        break;
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // Spawn a task to push frames from the coordinator to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // onDisconnect
    dispatch(
        &state,
        connection_id,
        DispatchEvent::Inbound(InboundEvent::Disconnect),
    );
}
