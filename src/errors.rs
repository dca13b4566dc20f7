use std::any::Any;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Failed to serialize event: {0}")]
    Serialization(String),

    /// Returned by custom `EventLogger` sinks that cannot accept a record.
    #[error("Failed to write log record: {0}")]
    Logging(String),

    #[error("Handler panicked: {0}")]
    Panic(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for HandlerError {
    fn from(error: serde_json::Error) -> Self {
        HandlerError::Serialization(error.to_string())
    }
}

impl HandlerError {
    /// Builds a `Panic` error from the payload returned by `catch_unwind`.
    #[must_use]
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };
        HandlerError::Panic(message)
    }
}
