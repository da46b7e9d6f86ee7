// ABOUTME: Server binary for the DiabEat diet recommendation API
// ABOUTME: Loads configuration, initializes logging, and runs the HTTP server
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # DiabEat Server Binary
//!
//! Starts the diet recommendation API: the chat-style intake page at `/`,
//! the recommendation endpoint, and the health check.

use anyhow::Result;
use clap::Parser;
use diabeat_server::{config::environment::ServerConfig, logging, server::HttpServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "diabeat-server")]
#[command(about = "DiabEat - rule-based diabetes diet recommendation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override static asset directory
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply command-line overrides
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    logging::init_from_env()?;

    info!("Starting DiabEat diet recommendation server");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    let server = HttpServer::new(Arc::new(config));
    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display the available endpoints with their port
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Intake Page:       GET  http://{host}:{port}/");
    info!("   Recommendation:    POST http://{host}:{port}/api/recommend");
    info!("   Health Check:      GET  http://{host}:{port}/api/health");
    info!("   Readiness Check:   GET  http://{host}:{port}/api/ready");
    info!("=== End of Endpoint List ===");
}
