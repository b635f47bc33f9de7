use thiserror::Error;

/// Failures surfaced by `NoteClient`. Every request either returns its
/// decoded value or one of these; nothing panics on a bad response.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No authentication token available. Please authenticate first.")]
    NotAuthenticated,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No token received")]
    MissingToken,
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Optional JSON body the service sends with error statuses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    fn truncate_body(body: &str) -> String {
        match body.char_indices().nth(MAX_ERROR_BODY_LENGTH) {
            None => body.to_string(),
            Some((cut, _)) => format!("{}... (truncated, {} total bytes)", &body[..cut], body.len()),
        }
    }

    /// Build a status error, preferring the server's `message` field and
    /// falling back to the raw body text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { message: Some(m) }) => m,
            Ok(ErrorBody { message: None }) => "Unknown error".to_string(),
            Err(_) => Self::truncate_body(body),
        };
        ApiError::Status { status, message }
    }

    /// True when the failure is the missing-token precondition rather than
    /// anything that happened on the wire.
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated)
    }
}
