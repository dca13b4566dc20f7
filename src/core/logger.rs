//! Logging seam used by the handler.
//!
//! The handler never calls `tracing` directly; it writes through an
//! [`EventLogger`] so that a failing sink can be injected in tests.

use crate::errors::HandlerError;
use serde_json::Value;
use std::fmt::Display;
use tracing::{error, info};

pub trait EventLogger: Send + Sync {
    /// Records the received event. May fail.
    fn log_event(&self, event: &Value) -> Result<(), HandlerError>;

    /// Records a handler failure. Must not fail.
    fn log_error(&self, error: &dyn Display);
}

/// Default logger: emits records through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl EventLogger for TracingLogger {
    fn log_event(&self, event: &Value) -> Result<(), HandlerError> {
        let rendered = serde_json::to_string(event)?;
        info!("Received event: {}", rendered);
        Ok(())
    }

    fn log_error(&self, err: &dyn Display) {
        error!("Error: {}", err);
    }
}
