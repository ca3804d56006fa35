//! Router for the chat API

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};

use super::public;
use crate::api::state::AppState;
use crate::chat::exchange;

type SharedState = Arc<AppState>;

/// Relay the user's message to the completion API. The response is
/// always 200 with a plain text body: the assistant's reply on
/// success, a readable explanation on failure.
async fn chat_message(
    State(state): State<SharedState>,
    Query(params): Query<public::ChatMessageParams>,
) -> String {
    exchange(&state.transcript, &state.config, &params.msg).await
}

/// JSON view of the shared transcript
async fn chat_history(State(state): State<SharedState>) -> Json<public::ChatHistoryResponse> {
    let transcript = state
        .transcript
        .read()
        .expect("Unable to read transcript")
        .snapshot();
    Json(public::ChatHistoryResponse { transcript })
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/get", get(chat_message))
        .route("/api/chat/history", get(chat_history))
}
