//! CLI entrypoint for quickask
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use quickask_application::{RunAskInput, RunAskUseCase};
use quickask_domain::Model;
use quickask_infrastructure::{ConfigLoader, OllamaLlmGateway};
use quickask_presentation::{Cli, StdioConsole};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    // stdout carries only the prompt and the answer
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        print!(
            "{}",
            ConfigLoader::describe_config_sources(cli.config.as_deref())
        );
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;

    let (host, host_error) = config.server.server_host();
    if let Some(e) = host_error {
        warn!("{}; using port {}", e, host.port);
    }

    info!("Starting quickask against {}", host);

    // === Dependency Injection ===
    let gateway = Arc::new(OllamaLlmGateway::new(host)?);
    let console = Arc::new(StdioConsole::stdio());
    let use_case = RunAskUseCase::new(gateway, console);

    let input = RunAskInput::new(Model::Llama3).with_stream(cli.stream || config.output.stream);
    use_case.execute(input).await?;

    Ok(())
}
