// ABOUTME: NGX Pulse backend server binary
// ABOUTME: Loads environment configuration, initializes logging, and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

//! # NGX Pulse Server Binary
//!
//! Serves health checks, coach messages, program generation, and the staging
//! demo dataset.

use anyhow::Result;
use clap::Parser;
use ngx_pulse::{config::ServerConfig, logging, server};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ngx-pulse-server")]
#[command(about = "NGX Pulse - wellness program generation and companion API")]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("Starting NGX Pulse server");
    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }
    info!("Server stopped");
    Ok(())
}
