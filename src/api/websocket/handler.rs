//! WebSocket connection handler

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tracing::{debug, info, warn};

use super::events::{ClientMessage, HubEvent, PongMessage};
use super::state::AppState;

/// Longest a single frame write may take before the viewer is dropped
const SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let mut session = state.hub.connect();
    let session_id = session.id();
    info!(session_id, "dashboard viewer connected");

    loop {
        tokio::select! {
            // Hub events to client
            event = session.recv() => {
                match event {
                    Some(event) => {
                        if !send_event(&mut socket, &event).await {
                            break; // Client disconnected or stalled
                        }
                    }
                    None => break, // Hub dropped the session
                }
            }

            // Handle client messages
            result = socket.recv() => {
                match result {
                    Some(Ok(msg)) => {
                        if !handle_client_message(msg, &mut socket).await {
                            break; // Client requested close
                        }
                    }
                    Some(Err(_)) => break, // WebSocket error
                    None => break, // Client disconnected
                }
            }
        }
    }

    state.hub.disconnect(session_id);
    info!(session_id, "dashboard viewer disconnected");
}

/// Write one hub event. Returns false if the connection should be closed.
async fn send_event(socket: &mut WebSocket, event: &HubEvent) -> bool {
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "failed to serialize hub event");
            return true;
        }
    };

    send_frame(socket, Message::Text(json)).await
}

/// Write one frame within `SEND_TIMEOUT`. Returns false if the connection should be closed.
async fn send_frame(socket: &mut WebSocket, msg: Message) -> bool {
    match tokio::time::timeout(SEND_TIMEOUT, socket.send(msg)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            debug!(error = %e, "viewer send failed");
            false
        }
        Err(_) => {
            warn!("viewer send timed out");
            false
        }
    }
}

/// Handle a message from the client
/// Returns false if the connection should be closed
async fn handle_client_message(msg: Message, socket: &mut WebSocket) -> bool {
    match msg {
        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
            Ok(ClientMessage::Ping) => match serde_json::to_string(&PongMessage::default()) {
                Ok(json) => send_frame(socket, Message::Text(json)).await,
                Err(_) => true,
            },
            Err(_) => true, // Ignore unknown client messages
        },
        Message::Binary(_) => true, // Ignore binary messages
        Message::Ping(data) => send_frame(socket, Message::Pong(data)).await,
        Message::Pong(_) => true,
        Message::Close(_) => false,
    }
}
