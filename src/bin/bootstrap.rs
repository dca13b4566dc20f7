// This is the Lambda bootstrap entry point

use hello_lambda::api::handler;
use lambda_runtime::{Error, run, service_fn};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = hello_lambda::setup_logging();

    let function_name = config.function_name.as_deref().unwrap_or("unknown");
    info!(function_name = %function_name, "Starting Lambda runtime");

    run(service_fn(handler)).await
}
