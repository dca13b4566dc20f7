//! Response builders for the handler.

use crate::core::models::{FAILURE_BODY, InvocationResponse, SUCCESS_BODY};

/// Returns the 200 greeting response.
#[must_use]
pub fn ok_response() -> InvocationResponse {
    InvocationResponse {
        status_code: 200,
        body: SUCCESS_BODY.to_string(),
    }
}

/// Returns the generic 500 response. The cause is only ever logged.
#[must_use]
pub fn err_response() -> InvocationResponse {
    InvocationResponse {
        status_code: 500,
        body: FAILURE_BODY.to_string(),
    }
}
