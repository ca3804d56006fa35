//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::openrouter::Message;

#[derive(Deserialize)]
pub struct ChatMessageParams {
    pub msg: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub transcript: Vec<Message>,
}
