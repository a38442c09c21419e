//! CLI entrypoint for parley
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use parley_application::ChatSession;
use parley_domain::Model;
use parley_infrastructure::{ConfigLoader, OpenAiGateway};
use parley_presentation::{ChatRepl, Cli};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Credential resolution is the one fatal path: it runs before any
    // prompt is shown.
    let api_key = config.provider.resolve_api_key()?;

    let mut params = config.provider.generation_params();
    if let Some(model) = &cli.model {
        params = params.with_model(Model::from(model.as_str()));
    }

    info!("Starting parley with model {}", params.model);

    // === Dependency Injection ===
    let gateway = Arc::new(OpenAiGateway::new(&config.provider, api_key));

    let session = ChatSession::new(gateway, params)
        .with_name(&config.chat.assistant_name)
        .with_system_prompt(&config.chat.system_prompt);

    let mut repl = ChatRepl::new(session)
        .with_progress(config.repl.show_progress && !cli.quiet)
        .with_history_file(config.repl.history_file.as_deref().map(PathBuf::from));

    repl.run().await?;

    Ok(())
}
