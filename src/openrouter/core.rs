use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Classified outcome of a failed completion call. The `Display`
/// rendering of each variant is the text shown to the end user.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error(
        "ERROR: OpenRouter API key is missing. Set the OPENROUTER_API_KEY environment variable."
    )]
    MissingApiKey,
    #[error("Error reaching the completion API: {0}")]
    Transport(String),
    #[error(
        "Error 404 (Not Found): the model '{model}' may be temporarily unavailable on OpenRouter. Details: {detail}"
    )]
    ModelNotFound { model: String, detail: String },
    #[error("Rate limit exceeded (429 Too Many Requests). Please wait and try again.")]
    RateLimited,
    #[error("Authentication error: check your OPENROUTER_API_KEY and its permissions.")]
    Unauthorized,
    #[error("An API request error occurred (status {status}): {detail}")]
    UpstreamStatus { status: u16, detail: String },
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

// OpenRouter reports failures as {"error": {"message": "..."}} but not
// every error body is JSON (proxies can return HTML or nothing at all).
fn classify_status(status: StatusCode, body: &str, model: &str) -> CompletionError {
    let upstream_detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()));

    match status {
        StatusCode::NOT_FOUND => CompletionError::ModelNotFound {
            model: model.to_string(),
            detail: upstream_detail.unwrap_or_else(|| "Model might be unavailable.".to_string()),
        },
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Unauthorized,
        _ => CompletionError::UpstreamStatus {
            status: status.as_u16(),
            detail: upstream_detail.unwrap_or_else(|| {
                let body = body.trim();
                if body.is_empty() {
                    "no further details provided by the API".to_string()
                } else {
                    body.to_string()
                }
            }),
        },
    }
}

/// Requests the next assistant message for the given transcript from
/// the OpenRouter chat completions endpoint. Short-circuits without
/// any network I/O when no API key is configured.
pub async fn completion(
    messages: &[Message],
    api_url: &str,
    api_key: Option<&str>,
    model: &str,
    temperature: f32,
) -> Result<String, CompletionError> {
    let Some(api_key) = api_key else {
        return Err(CompletionError::MissingApiKey);
    };

    let payload = json!({
        "model": model,
        "messages": messages,
        "temperature": temperature,
    });
    let url = format!("{}/chat/completions", api_url.trim_end_matches("/"));
    tracing::debug!("Requesting completion from {}", url);
    tracing::debug!("Payload model: {}", model);

    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await
        .map_err(|e| CompletionError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_status(status, &body, model));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| CompletionError::Unexpected(e.to_string()))?;
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            CompletionError::Unexpected(format!(
                "completion response missing message content: {}",
                body
            ))
        })
}
