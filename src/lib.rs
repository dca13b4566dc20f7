//! hello-lambda - a minimal AWS Lambda function that greets every invocation.
//!
//! The handler logs the received event and returns a fixed
//! `{"statusCode": 200, "body": "Hello World from Lambda!"}` response. Any
//! failure while doing so is logged and turned into a fixed
//! `{"statusCode": 500, "body": "An error occurred"}` response instead of being
//! propagated to the runtime.
//!
//! # Example
//!
//! ```
//! use hello_lambda::api::handler::handle;
//! use lambda_runtime::Context;
//!
//! let response = handle(&serde_json::json!({}), &Context::default());
//! assert_eq!(response.status_code, 200);
//! assert_eq!(response.body, "Hello World from Lambda!");
//! ```
// Module declarations
pub mod api;
pub mod core;
pub mod errors;

use crate::core::config::{AppConfig, LogFormat};
use crate::errors::HandlerError;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Configure structured logging for AWS Lambda environments.
///
/// Reads [`AppConfig`] from the environment and installs a `tracing-subscriber`
/// registry. JSON output (the default) is suitable for `CloudWatch` Logs
/// integration. An invalid `LOG_FORMAT` or `RUST_LOG` falls back to the
/// defaults with a warning. Calling this more than once is a no-op.
///
/// Returns the configuration that was settled on.
///
/// # Example
///
/// ```
/// let config = hello_lambda::setup_logging();
/// assert!(!config.log_filter.is_empty());
/// ```
pub fn setup_logging() -> AppConfig {
    let (mut config, config_err) = AppConfig::from_env_or_default();

    let (filter, filter_err) = match build_filter(&config.log_filter) {
        Ok(filter) => (filter, None),
        Err(e) => {
            config.log_filter = "info".to_string();
            (EnvFilter::new("info"), Some(e))
        }
    };

    init_subscriber(&config, filter);

    for e in config_err.iter().chain(filter_err.iter()) {
        warn!("Falling back to default logging configuration: {}", e);
    }

    config
}

/// Parses a `RUST_LOG`-style directive.
pub fn build_filter(directive: &str) -> Result<EnvFilter, HandlerError> {
    EnvFilter::try_new(directive)
        .map_err(|e| HandlerError::Config(format!("RUST_LOG: {}", e)))
}

/// Installs the global subscriber described by `config`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_subscriber(config: &AppConfig, filter: EnvFilter) -> bool {
    use tracing_subscriber::prelude::*;

    let (json_layer, text_layer) = match config.log_format {
        LogFormat::Json => (
            Some(tracing_subscriber::fmt::layer().json().with_target(true)),
            None,
        ),
        LogFormat::Text => (
            None,
            Some(tracing_subscriber::fmt::layer().with_target(true)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .is_ok()
}
