//! Loom Persona Migrator
//!
//! One-shot batch tool that converts legacy persona directories
//! (PERSONA.md + AI_START_HERE.md) into the Agent Skills format
//! (SKILL.md with YAML frontmatter).

mod cli;
mod config;
mod error;
mod extract;
mod logging;
mod migrate;
mod scanner;
mod skill;
mod version;

use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::config::MigratorConfig;
use crate::error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    // Light subcommands skip the full logging stack
    match cli.command {
        Some(Commands::Version) => {
            version::print_version();
            return Ok(());
        }
        Some(Commands::Config { subcommand }) => {
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand);
        }
        _ => {}
    }

    // Running without a subcommand performs the migration
    let (config_path, root_override) = match cli.command {
        Some(Commands::Migrate { config, root }) => (config, root),
        None => (None, None),
        _ => unreachable!(),
    };

    let mut config = MigratorConfig::load(config_path.as_deref())?;
    if let Some(root) = root_override {
        config.migration.root = root;
    }

    // The guards must be kept alive for the lifetime of the program
    let _log_guards = logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;

    let build = version::build_info();
    info!(
        version = %build.full_version(),
        root = %config.migration.root,
        "Starting persona migration"
    );

    let summary = migrate::run_migration(&config)?;
    info!(
        converted = summary.converted,
        total = summary.total,
        "Migration complete"
    );

    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = MigratorConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            config::init_config(path.as_deref(), force)?;
        }
        ConfigSubcommand::Validate { config } => {
            MigratorConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
