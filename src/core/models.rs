use serde::{Deserialize, Serialize};

pub const SUCCESS_BODY: &str = "Hello World from Lambda!";
pub const FAILURE_BODY: &str = "An error occurred";

/// The value returned to the Lambda runtime for every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}
