//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the persona migrator.

use clap::{Parser, Subcommand};

/// Loom Persona Migrator - converts personas to Agent Skills
///
/// Converts persona directories (PERSONA.md + AI_START_HERE.md) into the
/// standardized Agent Skills format (SKILL.md with YAML frontmatter),
/// relocating auxiliary files into references/ and removing the legacy
/// sources. Running without a subcommand performs the migration.
#[derive(Parser, Debug)]
#[command(name = "loom-migrate")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the migrator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert all persona directories under the personas root (the default)
    Migrate {
        /// Path to configuration file
        #[arg(short, long, env = "LOOM_MIGRATE_CONFIG")]
        config: Option<String>,

        /// Personas root directory (overrides configuration)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Display version and build information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}
