//! CLI entrypoint for focus-api
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use focus_application::{GenerationLogger, GeneratePhrasesUseCase};
use focus_infrastructure::{ConfigLoader, FileConfig, JsonlGenerationLogger, OpenAiGateway};
use focus_presentation::{AppState, Cli, KeyPool};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli)?;

    // === Configuration ===
    ConfigLoader::load_dotenv();
    let mut config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if cli.show_config {
        show_config(&config)?;
        return Ok(());
    }

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("{}", issue);
        }
        bail!("configuration has {} problem(s)", issues.len());
    }
    let credentials = config.require_credentials()?;

    info!(
        model = %config.generation.model,
        credentials = credentials.len(),
        format = %config.generation.format,
        "Starting focus-api"
    );

    // === Dependency Injection ===
    let params = config.generation_params();
    let gateway = Arc::new(OpenAiGateway::new(&config.openai.base_url, params.deadline)?);

    let mut use_case = GeneratePhrasesUseCase::new(gateway, params);
    if let Some(path) = &config.logging.transcript_path {
        match JsonlGenerationLogger::new(path) {
            Some(logger) => {
                info!(path = %logger.path().display(), "Writing generation transcript");
                let logger: Arc<dyn GenerationLogger> = Arc::new(logger);
                use_case = use_case.with_logger(logger);
            }
            None => warn!("Generation transcript disabled"),
        }
    }

    let shutdown = CancellationToken::new();
    let state =
        AppState::new(use_case, KeyPool::new(credentials)).with_shutdown(shutdown.clone());

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested");
                shutdown.cancel();
            }
            Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
        }
    });

    focus_presentation::serve(listener, state).await?;
    Ok(())
}

/// stderr logging filtered by `-v` (or `RUST_LOG`), plus an optional file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_directive()))
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let Some(path) = &cli.log_file else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file has no file name: {}", path.display()))?;
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create {}", directory.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&directory, file_name));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(filter());

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(Some(guard))
}

fn show_config(config: &FileConfig) -> Result<()> {
    for line in ConfigLoader::describe_sources() {
        println!("{}", line);
    }
    println!();
    println!("{}", config.to_toml()?);

    match config.openai.resolve_credentials().len() {
        0 => println!(
            "# no credentials found in {0} or {0}_1..{0}_{1}",
            config.openai.api_key_env, config.openai.key_slots
        ),
        n => println!("# {} credential(s) resolved", n),
    }
    Ok(())
}
