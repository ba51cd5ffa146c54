//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.
//! The acting user is bound once, at upgrade time.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};

use crate::error::GameError;
use crate::identity::ActingUser;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::logic;
use crate::state::AppState;

#[instrument(level = "info", skip(state, ws, user), fields(user = %user.id))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>, user: ActingUser) -> impl IntoResponse {
  info!(target: "microbe_game", user = %user.id, "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state, user))
}

#[instrument(level = "info", skip(socket, state, user), fields(user = %user.id))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>, user: ActingUser) {
  info!(target: "microbe_game", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "microbe_game", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state, &user).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "microbe_game", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "microbe_game", "WebSocket disconnected");
}

fn or_error<T>(res: Result<T, GameError>, wrap: impl FnOnce(T) -> ServerWsMessage) -> ServerWsMessage {
  match res {
    Ok(v) => wrap(v),
    Err(e) => ServerWsMessage::Error { message: e.to_string() },
  }
}

#[instrument(level = "info", skip(state, user))]
async fn handle_client_ws(msg: ClientWsMessage, state: &AppState, user: &ActingUser) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::GetCase { case_id } =>
      or_error(logic::get_case_for_play(state, &case_id), |case| ServerWsMessage::Case { case }),

    ClientWsMessage::CheckSamples { case_id, samples } =>
      or_error(logic::check_samples(state, &case_id, &samples), ServerWsMessage::SamplesResult),

    ClientWsMessage::CheckTests { case_id, tests } =>
      or_error(logic::check_tests(state, &case_id, tests), ServerWsMessage::TestsResult),

    ClientWsMessage::CheckBacterium { case_id, bacterium_name } => {
      let res = logic::check_bacterium(state, &case_id, bacterium_name.as_deref(), user).await;
      or_error(res, ServerWsMessage::BacteriumResult)
    }
  }
}
