//! Lambda handler.
//!
//! Logs the received event and answers with a fixed greeting. Any failure
//! inside the guarded block, panics included, is logged and turned into the
//! fixed 500 response; nothing is ever returned to the runtime as an error.

use super::helpers;
use crate::core::logger::{EventLogger, TracingLogger};
use crate::core::models::InvocationResponse;
use crate::errors::HandlerError;
use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};

pub use self::function_handler as handler;

/// Lambda entrypoint. Always returns `Ok`.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    Ok(handle(&event.payload, &event.context))
}

/// Handles one invocation using the default `tracing` logger.
#[must_use]
pub fn handle(event: &Value, context: &Context) -> InvocationResponse {
    handle_with(&TracingLogger, event, context)
}

/// Handles one invocation, writing log records through `logger`.
///
/// The context is accepted for signature parity with the runtime and is not
/// inspected.
pub fn handle_with<L>(logger: &L, event: &Value, _context: &Context) -> InvocationResponse
where
    L: EventLogger + ?Sized,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| process(logger, event)))
        .unwrap_or_else(|payload| Err(HandlerError::from_panic(payload.as_ref())));

    match outcome {
        Ok(response) => response,
        Err(e) => {
            // a panicking sink must not take the fallback down with it
            let _ = panic::catch_unwind(AssertUnwindSafe(|| logger.log_error(&e)));
            helpers::err_response()
        }
    }
}

fn process<L>(logger: &L, event: &Value) -> Result<InvocationResponse, HandlerError>
where
    L: EventLogger + ?Sized,
{
    logger.log_event(event)?;
    Ok(helpers::ok_response())
}
