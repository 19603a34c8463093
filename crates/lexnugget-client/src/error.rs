use lexnugget_core::EnvelopeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed response envelope: {0}")]
    Envelope(#[from] EnvelopeError),
}

impl ClientError {
    /// User-facing message for loader boundaries: prefer the backend's
    /// own `message` field when the body carries one.
    pub fn user_message(&self, fallback: &str) -> String {
        if let ClientError::Server { body, .. } = self {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
                if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
                    return msg.to_string();
                }
            }
        }
        fallback.to_string()
    }
}
