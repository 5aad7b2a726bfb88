//! Labmock CLI and Server Binary
//!
//! Entry point of the mock laboratory instrument service. It provides
//! commands for starting the service, validating and initializing a
//! configuration file, and listing the registered routes.

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use config::{
    generate_default_config, load_config, save_config, validate_config, LabmockConfig,
};
use observability::{check_filter, init_logging, LogFormat};
use server::{validate_port_available, HttpServer, ServerConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Start {
            config,
            host,
            port,
            log_format,
        } => start_command(config, host, port, log_format).await,
        Commands::Validate { config } => {
            init_logging("labmock", LogFormat::Pretty, "info")?;
            info!("Executing 'validate' command");
            validate_command(config)
        }
        Commands::Init { output } => {
            init_logging("labmock", LogFormat::Pretty, "info")?;
            info!("Executing 'init' command");
            init_command(output)
        }
        Commands::Routes => routes_command(),
    }
}

/// Load the config file (or defaults) and apply CLI overrides on top
fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    log_format: Option<String>,
) -> Result<LabmockConfig> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => LabmockConfig::default(),
    };

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(format) = log_format {
        config.logging.format = format;
    }

    Ok(config)
}

/// Logging settings to start with, even if validation is about to fail
fn logging_settings(config: &LabmockConfig) -> (LogFormat, &str) {
    let format = LogFormat::parse(&config.logging.format).unwrap_or_default();
    let level = match check_filter(&config.logging.level) {
        Ok(()) => config.logging.level.as_str(),
        Err(_) => "info",
    };
    (format, level)
}

async fn start_command(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    log_format: Option<String>,
) -> Result<()> {
    let using_defaults = config_path.is_none();
    let config = resolve_config(config_path.as_deref(), host, port, log_format)?;

    let (format, level) = logging_settings(&config);
    init_logging(&config.service.name, format, level)?;

    info!("Labmock starting...");
    if using_defaults {
        debug!("No configuration file given, using defaults");
    }

    let report = validate_config(&config);

    if !report.warnings.is_empty() {
        warn!("Configuration warnings:");
        for warning in &report.warnings {
            warn!(field = %warning.field, message = %warning.message);
        }
    }

    if !report.is_valid() {
        error!(
            error_count = report.errors.len(),
            "Configuration validation failed"
        );
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start service due to configuration errors");
    }

    let server_config = ServerConfig::new(config.server.host.clone(), config.server.port);

    info!(
        service = %config.service.name,
        host = %server_config.host,
        port = server_config.http_port,
        "Starting mock instrument service"
    );

    let table = devices::device_routes().context("Failed to build route table")?;
    for route in table.iter() {
        debug!(method = %route.method(), template = route.template(), "Registered route");
    }

    validate_port_available(&server_config).await?;

    let server = HttpServer::from_table(server_config, table);
    server.run_until_ctrl_c().await?;

    info!("Labmock stopped");
    Ok(())
}

fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = match load_config(&config_path) {
        Ok(c) => c,
        Err(e) => {
            error!(%e, "Failed to load configuration");
            anyhow::bail!(e);
        }
    };

    let report = validate_config(&config);

    println!("\n=== Configuration Validation Report ===\n");

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Listen: {}:{}", config.server.host, config.server.port);
    println!(
        "Logging: level={} format={}",
        config.logging.level, config.logging.format
    );

    Ok(())
}

fn init_command<P: AsRef<Path>>(output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created successfully!");
    println!();
    println!("Location: {:?}", output_path);
    println!();
    println!("Next steps:");
    println!("  1. Edit the configuration file to customize host, port and logging");
    println!(
        "  2. Run 'labmock validate --config {:?}' to check configuration",
        output_path
    );
    println!(
        "  3. Run 'labmock start --config {:?}' to start the service",
        output_path
    );

    Ok(())
}

fn routes_command() -> Result<()> {
    let table = devices::device_routes().context("Failed to build route table")?;
    for route in table.iter() {
        println!("{:<7} {}", route.method().as_str(), route.template());
    }
    Ok(())
}
