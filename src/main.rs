use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatbot_web::config::{ServerArgs, ServerConfig};
use chatbot_web::server::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_args(ServerArgs::parse());
    run_server(config).await
}
