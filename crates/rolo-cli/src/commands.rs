use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use rolo_server::{RoloServer, ServerConfig};
use rolo_store::InMemoryContactStore;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    match cli.command {
        Command::Serve(args) => cmd_serve(config, args),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ServerConfig> {
    match &cli.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn apply_overrides(mut config: ServerConfig, args: &ServeArgs) -> ServerConfig {
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.cors {
        config.cors_permissive = true;
    }
    config
}

fn cmd_serve(config: ServerConfig, args: ServeArgs) -> anyhow::Result<()> {
    let config = apply_overrides(config, &args);
    let store = Arc::new(InMemoryContactStore::new());
    tracing::info!("initialized in-memory contact store");

    println!(
        "{} {} on {}",
        "✓".green().bold(),
        config.service_name.bold(),
        config.bind_addr.to_string().cyan()
    );
    for (method, path) in [
        ("POST", "/create"),
        ("PUT", "/update"),
        ("DELETE", "/delete"),
        ("POST", "/search"),
        ("GET", "/contacts"),
        ("GET", "/health"),
    ] {
        println!("  {:<6} {}", method.yellow(), path);
    }

    let server = RoloServer::new(config, store);
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(server.serve_with_shutdown(shutdown_signal()))?;
    Ok(())
}

fn cmd_config(config: &ServerConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
