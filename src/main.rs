#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use agent_registry::cli::{Cli, Commands};
use agent_registry::commands;
use agent_registry::config::Config;
use agent_registry::project::Project;
use agent_registry::registry::Registry;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Every command except strip-emoji needs the registry
    let open_registry = || -> Result<Registry> {
        let project = Project::detect(cli.root.as_deref())?;
        let config = Config::load(project.root())?.with_verbose(cli.verbose);
        tracing::debug!(root = %project.root().display(), "using registry");
        Ok(Registry::new(project.root(), &config))
    };

    let ok = match &cli.command {
        Commands::Validate => commands::validate::execute(&open_registry()?),
        Commands::CreateAgent {
            template,
            name,
            domain,
        } => {
            commands::create_agent::execute(&open_registry()?, template, name, domain.as_deref())?;
            true
        }
        Commands::Regenerate { agent, domain } => {
            commands::regenerate::execute(&open_registry()?, agent, domain.as_deref())?;
            true
        }
        Commands::RegenerateAll => commands::regenerate::execute_all(&open_registry()?)?,
        Commands::UpdateVersion {
            agent,
            version,
            changes,
        } => {
            commands::update_version::execute(&open_registry()?, agent, version, changes)?;
            true
        }
        Commands::Stats { json } => {
            commands::stats::execute(&open_registry()?, *json)?;
            true
        }
        Commands::BuildDocs => {
            commands::build_docs::execute(&open_registry()?)?;
            true
        }
        Commands::StripEmoji { directories } => {
            commands::strip_emoji::execute(directories)?;
            true
        }
        Commands::Clean => {
            commands::clean::execute(&open_registry()?)?;
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr; `-v` enables debug output, `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
