//! Waypoint CLI Application
//!
//! Command-line interface and MCP server for the waypoint career planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::io::{stdout, IsTerminal};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WaypointMcpServer};
use renderer::TerminalRenderer;
use waypoint_core::{GenerationConfig, ListHistory, PlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_key,
        models,
        command,
    } = Args::parse();

    let config = GenerationConfig::from_env()
        .context("Invalid configuration")?
        .with_api_key(api_key)
        .with_models(models);

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .with_config(config)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color && stdout().is_terminal());

    info!("Waypoint started");

    match command {
        Some(Serve) => {
            info!("Starting Waypoint MCP server");
            run_stdio_server(WaypointMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        Some(Generate(args)) => Cli::new(planner, renderer).generate(&args.into()).await,
        Some(History(args)) => Cli::new(planner, renderer).history(&args.into()).await,
        Some(Show(args)) => Cli::new(planner, renderer).show(&args.into()).await,
        Some(TestConnection) => Cli::new(planner, renderer).test_connection().await,
        Some(Timeframes) => Cli::new(planner, renderer).timeframes(),
        Some(Suggest(args)) => Cli::new(planner, renderer).suggest(args.category.as_deref()),
        None => {
            Cli::new(planner, renderer)
                .history(&ListHistory::default())
                .await
        }
    }
}
