// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Args;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::RegistrarConfig;
use crate::registration::{
    field_errors, render, FormField, HttpRegistrationClient, Language, RegisterEmbeddingModel,
    RegisterModelRequest, SharedErrorSlot, SubmitOutcome, INVALID_FORM_MESSAGE,
    UNEXPECTED_ERROR_MESSAGE,
};

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Model name (letters, digits, '_' and '-', starting with a letter or digit)
    #[arg(long)]
    pub model_name: Option<String>,

    /// Embedding vector size
    #[arg(long, allow_hyphen_values = true)]
    pub dimensions: Option<String>,

    /// Maximum input tokens
    #[arg(long, allow_hyphen_values = true)]
    pub max_tokens: Option<String>,

    /// Comma-separated model languages (en, zh)
    #[arg(long, value_delimiter = ',')]
    pub language: Vec<Language>,

    /// Model directory path on the backend host
    #[arg(long)]
    pub model_uri: Option<String>,

    /// Do not persist the registration across backend restarts
    #[arg(long)]
    pub no_persist: bool,

    /// Show the form and request body without sending anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Hide built-in models
    #[arg(long)]
    pub custom_only: bool,
}

/// Arguments for the unregister command
#[derive(Args, Debug)]
pub struct UnregisterArgs {
    /// Name of the custom model to remove
    #[arg(long)]
    pub model_name: String,
}

/// Apply command-line values to a fresh form the way a user would edit it
pub fn apply_args(form: &mut RegisterEmbeddingModel, args: &RegisterArgs) {
    let edits = [
        (FormField::ModelName, &args.model_name),
        (FormField::Dimensions, &args.dimensions),
        (FormField::MaxTokens, &args.max_tokens),
        (FormField::ModelUri, &args.model_uri),
    ];
    for (field, value) in edits {
        if let Some(raw) = value {
            form.update_field(field, raw);
        }
    }

    if !args.language.is_empty() {
        for lang in &args.language {
            if !form.form().has_language(*lang) {
                form.toggle_language(*lang);
            }
        }
        for lang in Language::SUPPORTED {
            if form.form().has_language(lang) && !args.language.contains(&lang) {
                form.toggle_language(lang);
            }
        }
    }
}

/// Register a custom embedding model
pub async fn register_model(args: RegisterArgs, config: RegistrarConfig) -> Result<()> {
    let errors = SharedErrorSlot::new();
    let client = HttpRegistrationClient::with_timeout(&config.endpoint, config.timeout())?;
    let mut form = RegisterEmbeddingModel::with_transport(Arc::new(client), Arc::new(errors.clone()))
        .with_persist(config.persist && !args.no_persist);

    apply_args(&mut form, &args);

    println!("\n📋 Registration Details ({}):\n", config.endpoint);
    println!("{}", render(&form));

    if args.dry_run {
        println!("🔍 DRY RUN MODE - No request will be sent");
        let problems = field_errors(form.form());
        if !problems.is_empty() {
            for problem in &problems {
                println!("   ❌ {}", problem);
            }
            return Err(anyhow!(INVALID_FORM_MESSAGE));
        }

        let request = RegisterModelRequest {
            model: form.form().to_model_json()?,
            persist: config.persist && !args.no_persist,
        };
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    match form.submit().await {
        SubmitOutcome::Registered => {
            info!("Registered '{}'", form.form().model_name);
            println!("✅ {}", form.success_msg());
            Ok(())
        }
        SubmitOutcome::Invalid(_) => {
            for problem in field_errors(form.form()) {
                println!("   ❌ {}", problem);
            }
            Err(anyhow!(errors
                .take()
                .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string())))
        }
        SubmitOutcome::Rejected { status, message } => {
            if status == 400 && message.contains("already") {
                println!("   💡 A model with this name is already registered");
            }
            Err(anyhow!(message))
        }
        SubmitOutcome::Failed(message) => {
            warn!("Registration request failed: {}", message);
            println!("   💡 Is the backend reachable at {}?", config.endpoint);
            Err(anyhow!(message))
        }
    }
}

/// List registered embedding models
pub async fn list_models(args: ListArgs, config: RegistrarConfig) -> Result<()> {
    let client = HttpRegistrationClient::with_timeout(&config.endpoint, config.timeout())?;
    let models = client.list().await?;

    let shown: Vec<_> = models
        .iter()
        .filter(|m| !(args.custom_only && m.is_builtin))
        .collect();

    println!("\n📊 Embedding model registrations ({}):", shown.len());
    for model in shown {
        let kind = if model.is_builtin { "built-in" } else { "custom" };
        println!("  {:<40} {}", model.model_name, kind);
    }

    Ok(())
}

/// Remove a custom embedding model registration
pub async fn unregister_model(args: UnregisterArgs, config: RegistrarConfig) -> Result<()> {
    let client = HttpRegistrationClient::with_timeout(&config.endpoint, config.timeout())?;
    client.unregister(&args.model_name).await?;
    println!("✅ Unregistered '{}'", args.model_name);
    Ok(())
}
