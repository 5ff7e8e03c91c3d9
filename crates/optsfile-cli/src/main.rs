#![deny(unsafe_code)]

//! OptsFile CLI: parse and inspect `.of` files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use optsfile::{AppConfig, OptionValue, Options, Reader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Read OptsFile (`.of`) option files.
#[derive(Parser)]
#[command(name = "optsfile", version, about, long_about = None)]
struct Cli {
    /// Path to the tool's own configuration file.
    #[arg(short, long, default_value = "optsfile.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a file and print the options mapping.
    Parse {
        /// The `.of` file to read.
        file: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Print the tokenized records of a file, one per line.
    Tokens {
        /// The `.of` file to read.
        file: PathBuf,
    },

    /// Check that a file parses.
    Check {
        /// The `.of` file to read.
        file: PathBuf,
    },

    /// Print a single option by dot-separated path (e.g. `Car.Make`).
    Get {
        /// The `.of` file to read.
        file: PathBuf,

        /// Dot-separated key path.
        key: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, found) = load_config(&cli.config)?;

    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if found {
        debug!(path = %cli.config.display(), "Loaded tool configuration");
    } else {
        debug!(path = %cli.config.display(), "Config file not found, using defaults");
    }

    match cli.command {
        Commands::Parse { file, format } => cmd_parse(&config, &file, format),
        Commands::Tokens { file } => cmd_tokens(&config, &file),
        Commands::Check { file } => cmd_check(&config, &file),
        Commands::Get { file, key } => cmd_get(&config, &file, &key),
    }
}

fn cmd_parse(config: &AppConfig, file: &Path, format: Format) -> Result<()> {
    let options = read_options(config, file)?;
    println!("{}", render(&options, format)?);
    Ok(())
}

fn cmd_tokens(config: &AppConfig, file: &Path) -> Result<()> {
    let reader = Reader::with_config(file, &config.tokenizer)?;
    for record in reader.read_records()? {
        println!(
            "{:>4}  {}  {}",
            record.line,
            record.depth,
            record.tokens.join(" ")
        );
    }
    Ok(())
}

fn cmd_check(config: &AppConfig, file: &Path) -> Result<()> {
    let options = read_options(config, file)?;
    info!(options = options.len(), "File is valid");
    println!("'{}' is valid.", file.display());
    Ok(())
}

fn cmd_get(config: &AppConfig, file: &Path, key: &str) -> Result<()> {
    let options = read_options(config, file)?;
    match options.get_path(key) {
        Some(OptionValue::Value(value)) => println!("{value}"),
        Some(OptionValue::Section(section)) => println!("{}", render(section, Format::Json)?),
        None => anyhow::bail!("no option '{key}' in '{}'", file.display()),
    }
    Ok(())
}

fn read_options(config: &AppConfig, file: &Path) -> Result<Options> {
    Reader::with_config(file, &config.tokenizer)?
        .read()
        .with_context(|| format!("failed to parse '{}'", file.display()))
}

fn render(options: &Options, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(options).context("JSON error"),
        Format::Toml => toml::to_string_pretty(options).context("TOML error"),
    }
}

/// Load the tool configuration, falling back to defaults when the file is
/// absent. Returns whether the file was found.
fn load_config(path: &Path) -> Result<(AppConfig, bool)> {
    if path.exists() {
        let config = AppConfig::load(path)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;
        Ok((config, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}
