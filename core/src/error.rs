use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("external command `{command}` failed: {reason}")]
    ExternalCommand { command: String, reason: String },

    #[error("failed to parse address inventory: {0}")]
    Parse(String),

    #[error("no address allocation tagged {key}={value}")]
    NotFound { key: String, value: String },
}

impl From<serde_json::Error> for LookupError {
    fn from(value: serde_json::Error) -> Self {
        LookupError::Parse(value.to_string())
    }
}
