// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod registration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RegistrarConfig;

/// Embedding model registration CLI
#[derive(Parser, Debug)]
#[command(name = "embedding-registrar")]
#[command(version)]
#[command(about = "Register custom embedding models with a model-serving backend", long_about = None)]
pub struct Cli {
    /// Backend base URL (can also be set via XINFERENCE_ENDPOINT env var)
    #[arg(long, global = true, env = "XINFERENCE_ENDPOINT")]
    pub endpoint: Option<String>,

    /// TOML config file with a [registrar] table
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a custom embedding model
    Register(registration::RegisterArgs),

    /// List registered embedding models
    List(registration::ListArgs),

    /// Remove a custom embedding model registration
    Unregister(registration::UnregisterArgs),
}

impl Cli {
    /// Resolve configuration: file, then environment, then flags
    pub fn resolve_config(&self) -> Result<RegistrarConfig> {
        let base = match &self.config {
            Some(path) => RegistrarConfig::from_file(path)
                .with_context(|| format!("Loading config from {}", path.display()))?,
            None => RegistrarConfig::default(),
        };

        let mut config = base.with_env_overrides();
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    match cli.command {
        Commands::Register(args) => registration::register_model(args, config).await,
        Commands::List(args) => registration::list_models(args, config).await,
        Commands::Unregister(args) => registration::unregister_model(args, config).await,
    }
}
