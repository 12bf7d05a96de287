// ABOUTME: Server binary for the Recipe Buddy middleware
// ABOUTME: Loads configuration, initializes logging and serves the recipe API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Buddy Server Binary
//!
//! Starts the HTTP API in front of the Spoonacular recipe/nutrition provider.

use anyhow::Result;
use clap::Parser;
use recipe_buddy_server::{config::ServerConfig, logging, resources::ServerResources, server};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-buddy-server")]
#[command(about = "Recipe Buddy - recipe search and calorie recalculation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Recipe Buddy server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config)?);
    server::serve(resources).await
}
