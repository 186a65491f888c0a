// src/main.rs
// Zephyr Scale MCP Server

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use zephyr_scale::client::ZephyrClient;
use zephyr_scale::config::Config;
use zephyr_scale::mcp::ZephyrServer;

#[derive(Parser)]
#[command(name = "zephyr-scale-mcp")]
#[command(about = "Zephyr Scale test management as MCP tools")]
#[command(version)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    Cli::parse();

    // The stdio transport owns stdout, so logs go to stderr and stay quiet.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Fatal before serving: without a token and project key no tool can work.
    let config = Config::from_env()?;
    info!(
        project_key = %config.project_key,
        base_url = %config.base_url,
        "starting Zephyr Scale MCP server"
    );

    let client = Arc::new(ZephyrClient::new(&config.base_url, &config.api_token));
    let server = ZephyrServer::new(client);

    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    Ok(())
}
