//! Findathon MCP Server - Main Entry Point
//!
//! This is the main entry point for the listing server application.
//! The actual implementation is in the `findathon_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use findathon_mcp::FindathonServerHandler;
use findathon_mcp::logging::init_logging;
use mcp_attr::server::serve_stdio;
use tracing::info;

/// Findathon MCP Server - browse and filter upcoming hackathons via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the hackathon listing file
    file: String,

    /// Pull the listing's git repository from origin before loading
    #[arg(long)]
    sync_git: bool,

    /// Log filter directive (e.g. "info", "findathon_mcp=debug")
    #[arg(long, env = "FINDATHON_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(&args.log_level)?;

    info!(file = %args.file, sync_git = args.sync_git, "starting findathon-mcp");
    let handler = FindathonServerHandler::new(&args.file, args.sync_git)?;
    serve_stdio(handler).await?;
    Ok(())
}
