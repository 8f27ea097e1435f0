use string_calculator::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = string_calculator::AppConfig::from_env().map_err(|e| {
        eprintln!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    string_calculator::setup_logging(&config);
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
