use clap::Parser;
use propgen_core::{ComponentIdentity, CoreError};
use propgen_registry::StaticRegistry;

mod bootstrap;
mod cli;
mod formatter;
mod generate;
mod installer;
mod locator;
mod output;
mod pipeline;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("propgen error: {error:#}");
        if let Some(hint) = error
            .downcast_ref::<CoreError>()
            .and_then(CoreError::remediation)
        {
            eprintln!("hint: {hint}");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    ui::init(&cli);

    let identity = ComponentIdentity::parse(&cli.component)?;
    let entry = StaticRegistry::new().lookup(identity.normalized_key());

    if cli.inspect_registry {
        if entry.is_none() {
            tracing::info!(
                key = identity.normalized_key(),
                "component is not in the static registry"
            );
        }
        return output::print_json(&entry);
    }

    let project_root = bootstrap::resolve_project_root(cli.project.as_deref())?;
    let config = bootstrap::load_config(&project_root)?;
    generate::handle(&cli, identity, entry, &project_root, &config).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PROPGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
