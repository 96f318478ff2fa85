//! pushdown — expression pushdown compiler CLI
//!
//! # Usage
//!
//! ```bash
//! # Translate a JSON expression tree
//! pushdown translate expr.json
//! cat expr.json | pushdown translate - --format json
//!
//! # Preview a format pattern transpilation
//! pushdown format "yyyy-MM-dd HH:mm:ss" --mode symbol
//!
//! # Show which gated features the configured dialect supports
//! pushdown features --dialect-version 6.5
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use tracing_subscriber::EnvFilter;

use pushdown::prelude::*;
use pushdown::transpiler::format::{self, FormatMode};

#[derive(Parser)]
#[command(name = "pushdown")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Expression pushdown compiler for MySQL-family analytical engines", long_about = None)]
#[command(after_help = "EXAMPLES:
    pushdown translate expr.json                 # Translate a JSON expression tree
    pushdown format \"yyyy-MM-dd\" --mode specifier # Show a format transpilation
    pushdown features --dialect-version 6.5      # List gated features")]
struct Cli {
    /// Config file (defaults to ./pushdown.toml, then the user config dir)
    #[arg(short, long, global = true, env = "PUSHDOWN_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured dialect version (e.g. 7.5.0)
    #[arg(long, global = true)]
    dialect_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate an expression tree read as JSON
    Translate {
        /// JSON file, or - for stdin
        input: String,
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Transpile a date format pattern
    Format {
        /// Host format pattern, e.g. yyyy-MM-dd
        pattern: String,
        #[arg(short, long, value_enum, default_value = "symbol")]
        mode: CliFormatMode,
    },
    /// List dialect-gated features
    Features,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, ValueEnum)]
enum CliFormatMode {
    Symbol,
    Specifier,
}

impl From<CliFormatMode> for FormatMode {
    fn from(val: CliFormatMode) -> Self {
        match val {
            CliFormatMode::Symbol => FormatMode::Symbol,
            CliFormatMode::Specifier => FormatMode::Specifier,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PushdownConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PushdownConfig::load().context("Failed to load pushdown.toml")?,
    };
    init_tracing(&config);

    if let Some(version) = &cli.dialect_version {
        Version::parse(version)?;
        config.dialect.version = Some(version.clone());
    }

    match cli.command {
        Commands::Translate { input, format } => translate(&config, &input, format)?,
        Commands::Format { pattern, mode } => show_format(&pattern, mode.into()),
        Commands::Features => show_features(&config)?,
    }
    Ok(())
}

fn init_tracing(config: &PushdownConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new(pushdown::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read expression from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
}

fn translate(config: &PushdownConfig, input: &str, format: OutputFormat) -> Result<()> {
    let ctx = config.context()?;
    let content = read_input(input)?;
    let expr: Expr = serde_json::from_str(&content).context("Input is not a valid expression tree")?;
    let rendered = expr.to_sql(&ctx)?;

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "dialect_version": ctx.version().to_string(),
                "translatable": rendered.is_some(),
                "sql": rendered.as_ref().map(|r| r.sql.clone()),
                "params": rendered.map(|r| r.params).unwrap_or_default(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => match rendered {
            Some(sql) => {
                println!("{}", sql.sql.green());
                if !sql.params.is_empty() {
                    println!();
                    println!("{}", "Parameters:".bold());
                    for (i, param) in sql.params.iter().enumerate() {
                        println!(
                            "  {} {} {}",
                            format!("?{}", i + 1).cyan(),
                            param.value,
                            format!("({})", param.data_type).dimmed()
                        );
                    }
                }
            }
            None => {
                println!(
                    "{} expression has no equivalent on dialect {}; it stays on the host",
                    "✗".yellow(),
                    ctx.version()
                );
            }
        },
    }
    Ok(())
}

fn show_format(pattern: &str, mode: FormatMode) {
    let output = format::transpile(pattern, mode);
    println!("{} {} {}", pattern.cyan(), "→".dimmed(), output.green());
}

fn show_features(config: &PushdownConfig) -> Result<()> {
    let version = config.version()?;
    let capabilities = Capabilities::new(version);
    println!("{} {}", "Dialect version:".bold(), version);
    println!();
    for feature in Feature::ALL {
        let mark = if capabilities.has(feature) {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "  {} {:<24} {}",
            mark,
            feature.to_string(),
            format!("(since {})", feature.min_version()).dimmed()
        );
    }
    Ok(())
}
