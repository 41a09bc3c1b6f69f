//! # Warden CLI
//!
//! Command-line interface for Warden Console.
//!
//! Headless access to configuration files, for scripts and CI:
//!
//! - `new` - Create a starter configuration file
//! - `validate` - Validate a configuration file
//! - `info` - Display information about a configuration file
//!

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use warden_model::serialization::{default_file_name, preview_config, save_config};
use warden_model::{GatewayConfig, ListenPort, ListenProtocol, Validator, load_config};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Argument Parsing
// ============================================================================

/// Warden Console command-line tools
#[derive(Debug, Parser)]
#[command(name = "warden", version, about = "Warden gateway configuration tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a starter configuration file
    New {
        /// Configuration name
        name: String,

        /// Output path (defaults to a name-derived file in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file to validate
        file: PathBuf,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },

    /// Display information about a configuration file
    Info {
        /// Configuration file to inspect
        file: PathBuf,
    },
}

// ============================================================================
// Command Execution
// ============================================================================

/// Run a parsed command, returning the process exit code
pub fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Command::New { name, output } => run_new(&name, output),
        Command::Validate { file, strict } => run_validate(&file, strict),
        Command::Info { file } => run_info(&file),
    }
}

fn run_new(name: &str, output: Option<PathBuf>) -> anyhow::Result<i32> {
    let path = output.unwrap_or_else(|| PathBuf::from(default_file_name(name)));
    if path.exists() {
        anyhow::bail!("refusing to overwrite existing file: {}", path.display());
    }

    let mut config = GatewayConfig::new(name);
    config.add_listen_port(ListenPort::new("Default HTTP", ListenProtocol::Http));
    save_config(&config, &path)?;

    println!(
        "{} configuration '{}' at {}",
        "Created".green().bold(),
        name,
        path.display()
    );
    Ok(0)
}

fn run_validate(file: &PathBuf, strict: bool) -> anyhow::Result<i32> {
    let config = load_config(file)?;
    let report = Validator::with_default_rules().validate(&config);

    for error in &report.errors {
        println!("{} {}", "error:".red().bold(), error);
        if let Some(suggestion) = &error.suggestion {
            println!("  {} {}", "hint:".cyan(), suggestion);
        }
    }
    for warning in &report.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    let failed = report.has_errors() || (strict && report.has_warnings());
    if failed {
        println!(
            "{}: {} error(s), {} warning(s)",
            "invalid".red().bold(),
            report.errors.len(),
            report.warnings.len()
        );
        Ok(1)
    } else {
        println!(
            "{}: {} warning(s)",
            "valid".green().bold(),
            report.warnings.len()
        );
        Ok(0)
    }
}

fn run_info(file: &PathBuf) -> anyhow::Result<i32> {
    let preview = preview_config(file)?;

    println!("{}", preview.name.bold());
    if let Some(description) = &preview.description {
        println!("  {}", description);
    }
    println!("  version:          {}", preview.version);
    println!("  schema version:   {}", preview.schema_version);
    println!("  listen ports:     {}", preview.listen_port_count);
    println!("  JDBC connections: {}", preview.jdbc_connection_count);
    Ok(0)
}

// ============================================================================
// Tests
// ============================================================================
