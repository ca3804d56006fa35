use std::sync::RwLock;

use crate::core::AppConfig;
use crate::openrouter::{Message, Role, completion};

use super::Transcript;

/// Runs one chat exchange: appends the user's turn, passes the full
/// transcript to the completion API, and appends the assistant's
/// reply. Failures never escape to the caller; every outcome comes
/// back as text for the response body.
///
/// The user turn is recorded before the credential check, so a failed
/// exchange still leaves the user's message in the transcript.
pub async fn exchange(transcript: &RwLock<Transcript>, config: &AppConfig, text: &str) -> String {
    tracing::info!("Received user query: {}", text);

    let snapshot = {
        let mut transcript = transcript.write().expect("Unable to write transcript");
        transcript.append(Message::new(Role::User, text));
        transcript.snapshot()
    };

    match completion(
        &snapshot,
        &config.api_url,
        config.api_key.as_deref(),
        &config.model,
        config.temperature,
    )
    .await
    {
        Ok(reply) => {
            tracing::info!("Completion request succeeded");
            transcript
                .write()
                .expect("Unable to write transcript")
                .append(Message::new(Role::Assistant, &reply));
            reply
        }
        Err(err) => {
            tracing::error!("Completion request failed: {}", err);
            err.to_string()
        }
    }
}
