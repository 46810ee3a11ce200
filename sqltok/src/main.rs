//! Sqltok CLI - see SQL the way the sharding middleware sees it.
//!
//! This is the main entry point for the sqltok CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shardlex_lex::DialectKind;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs, CheckCommand},
    common::{resolve_dialect, OutputFormat, SqlSource},
    keywords::{run_keywords, KeywordsArgs, KeywordsCommand},
    tokenize::{run_tokenize, TokenizeArgs, TokenizeCommand},
    traits::{Command, CommandDescription},
};
use config::Config;
use error::{Result, SqltokError};

/// Sqltok - tokenize and lint SQL for sharding middleware
///
/// Sqltok scans SQL statements with the same lexer the sharding engine
/// uses, so dialect keywords, hints, variables and lexical errors show up
/// exactly as the router would see them.
#[derive(Parser, Debug)]
#[command(name = "sqltok")]
#[command(author = "Shardlex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and lint SQL statements", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "SQLTOK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SQLTOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "SQLTOK_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the sqltok CLI.
///
/// Names and help text come from each command handler.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        name = TokenizeCommand::name(),
        about = TokenizeCommand::description(),
        long_about = TokenizeCommand::help()
    )]
    Tokenize(TokenizeOpts),

    #[command(
        name = CheckCommand::name(),
        about = CheckCommand::description(),
        long_about = CheckCommand::help()
    )]
    Check(CheckOpts),

    #[command(
        name = KeywordsCommand::name(),
        about = KeywordsCommand::description(),
        long_about = KeywordsCommand::help()
    )]
    Keywords(KeywordsOpts),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeOpts {
    /// Statement text; `-` or nothing reads stdin
    sql: Option<String>,

    /// Read the statement from a file
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// SQL dialect (default, mysql, oracle, postgresql, sqlserver, h2)
    #[arg(short, long)]
    dialect: Option<DialectKind>,

    /// Output format
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckOpts {
    /// Statement files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// SQL dialect (default, mysql, oracle, postgresql, sqlserver, h2)
    #[arg(short, long)]
    dialect: Option<DialectKind>,

    /// Number of parallel jobs (default: from config)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Skip remaining files after the first failure
    #[arg(long)]
    fail_fast: bool,
}

/// Arguments for the keywords subcommand.
#[derive(Parser, Debug)]
struct KeywordsOpts {
    /// Words to look up; lists every keyword when omitted
    words: Vec<String>,

    /// SQL dialect (default, mysql, oracle, postgresql, sqlserver, h2)
    #[arg(short, long)]
    dialect: Option<DialectKind>,
}

/// Main entry point for the sqltok CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| SqltokError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, &config),
        Commands::Check(args) => execute_check(args, &config),
        Commands::Keywords(args) => execute_keywords(args, &config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeOpts, config: &Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        source: SqlSource::from_args(args.sql, args.file)?,
        dialect: resolve_dialect(args.dialect, config),
        format: args.format.unwrap_or(config.format),
    };
    run_tokenize(tokenize_args)
}

/// Execute the check command.
fn execute_check(args: CheckOpts, config: &Config) -> Result<()> {
    let check_args = CheckArgs {
        files: args.files,
        dialect: resolve_dialect(args.dialect, config),
        jobs: args.jobs.unwrap_or(config.check.jobs),
        fail_fast: args.fail_fast || config.check.fail_fast,
    };
    run_check(check_args)
}

/// Execute the keywords command.
fn execute_keywords(args: KeywordsOpts, config: &Config) -> Result<()> {
    let keywords_args = KeywordsArgs {
        dialect: resolve_dialect(args.dialect, config),
        words: args.words,
    };
    run_keywords(keywords_args)
}
