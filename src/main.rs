// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nsvend::config::Config;
use nsvend::control_plane::ProtonControlPlane;
use nsvend::orchestrator::EnvironmentUpdater;
use nsvend::types::{NamespaceAction, ReconciliationRequest};

#[derive(Parser, Debug)]
#[command(
    name = "nsvend",
    version,
    about = "Vend Kubernetes namespaces on an EKS environment managed via AWS Proton"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Do not re-submit the environment when the namespace list is unchanged.
    #[arg(long, global = true)]
    skip_unchanged: bool,

    /// Print the outcome as JSON on stdout.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a namespace on the EKS environment managed via AWS Proton
    CreateNamespace(NamespaceArgs),
    /// Delete a namespace from the EKS environment managed via AWS Proton
    DeleteNamespace(NamespaceArgs),
}

#[derive(Args, Debug)]
struct NamespaceArgs {
    /// Kubernetes namespace name
    namespace_name: String,
    /// Environment to deploy the namespace on
    environment_name: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let (args, action) = match cli.command {
        Command::CreateNamespace(args) => (args, NamespaceAction::Create),
        Command::DeleteNamespace(args) => (args, NamespaceAction::Delete),
    };
    let request = ReconciliationRequest::new(args.namespace_name, args.environment_name, action)?;

    let mut config = Config::from_env()?;
    config.skip_unchanged |= cli.skip_unchanged;
    debug!("Configuration loaded: {:?}", config);

    let control_plane = ProtonControlPlane::from_config(&config).await;
    let updater = EnvironmentUpdater::new(control_plane, config);

    let outcome = updater.run(&request).await?;
    info!(
        "Namespace \"{}\" processed for environment \"{}\"",
        outcome.namespace, outcome.environment
    );

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("failed to serialize outcome JSON")?
        );
    }

    Ok(())
}
