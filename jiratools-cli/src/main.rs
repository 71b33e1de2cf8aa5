//! Command line entry point for the jira-tools MCP server
//!
//! Loads the Jira connection configuration from the environment and serves
//! the MCP tools over stdio. Logs go to stderr; stdout belongs to the MCP
//! transport.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rmcp::serve_server;
use rmcp::transport::io::stdio;

use jiratools_api::HttpJiraProvider;
use jiratools_config::JiraConfig;
use jiratools_tools::McpServer;

#[derive(Parser)]
#[command(
    name = "jiratools",
    about = "Issue tracker operations served over the Model Context Protocol",
    version
)]
struct Cli {
    /// Enable debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP tools over stdio (the default when no command is given)
    Serve,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rmcp=warn,{default_level}")));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve() -> Result<()> {
    let config = JiraConfig::from_env().context("Jira connection is not configured")?;
    tracing::info!("Serving MCP tools for {}", config.server);

    let provider = Arc::new(HttpJiraProvider::new(config));
    let server = McpServer::new(provider);

    let service = serve_server(server, stdio())
        .await
        .context("failed to start MCP stdio server")?;
    let quit_reason = service.waiting().await.context("MCP server task failed")?;
    tracing::info!("MCP server stopped: {quit_reason:?}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
    }
}
