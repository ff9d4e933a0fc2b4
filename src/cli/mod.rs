//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Seed a headless CMS with fixture records
#[derive(Parser, Debug)]
#[command(name = "cms-seed")]
#[command(version)]
#[command(about = "Populate a CMS with fixture taxonomies, a developer and a sample game")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Authenticate and post all fixtures
    Run(RunArgs),

    /// List the fixture plan without contacting the CMS
    List(ListArgs),

    /// Manage configuration files
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// CMS base URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Admin email
    #[arg(short, long)]
    pub email: Option<String>,

    /// Admin password
    #[arg(short, long)]
    pub password: Option<String>,

    /// Timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Exit with code 2 if any record fails
    #[arg(long)]
    pub strict: bool,

    /// Summary format (text, json, json-pretty)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show every record label
    #[arg(short, long)]
    pub detailed: bool,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a configuration file with default settings
    Init {
        /// Output path
        #[arg(short, long, default_value = "./cms-seed.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show the active configuration
    Show {
        /// Show environment variables instead
        #[arg(short, long)]
        env: bool,

        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// File to validate (defaults to the discovered config file)
        #[arg(short, long)]
        file: Option<String>,
    },
}
