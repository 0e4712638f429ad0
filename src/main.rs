use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;

use englishchat::api::handler::function_handler;
use englishchat::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    englishchat::setup_logging();

    // Resolved once at startup and injected into every invocation; the
    // handler itself never reads the environment.
    let config = AppConfig::from_env().map_err(Error::from)?;

    run(service_fn(move |event: LambdaEvent<Value>| {
        let config = config.clone();
        async move { function_handler(&config, event).await }
    }))
    .await
}
