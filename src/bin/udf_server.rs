use tracing_subscriber::EnvFilter;
use udf_adapter::server::{self, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = server::config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    server::run(config).await
}
