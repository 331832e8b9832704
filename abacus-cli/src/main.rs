//! Abacus CLI - Command line interface
//!
//! Tokenizes a source file, or starts an interactive shell when no file is given.

use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod logging;
mod platform;
mod repl;

use crate::config::{parse_log_level, LogConfig};
use crate::logging::LogFormat;
use crate::platform::{print_error, render_tokens};
use abacus_api::{get_config, init_config, load_config, tokenize_file, AbacusConfig, RunConfig};
use abacus_config::{LogLevel, OutputFormat};
use tracing::info;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG: &str = "abacus.json";

#[derive(Parser)]
#[command(
    name = "abacus",
    about = "Abacus arithmetic lexer - tokenize a file or start a shell",
    version
)]
struct Cli {
    /// Source file to tokenize (starts the interactive shell when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Configuration file path (default: ./abacus.json if present)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Print tokens and errors as JSON
    #[arg(long)]
    json: bool,

    /// Do not underline the offending source on errors
    #[arg(long)]
    no_arrows: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut app_config = match resolve_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    };
    apply_overrides(&mut app_config, &cli);

    let log_config = LogConfig::from(&app_config.logging);
    if let Err(e) = logging::init(&log_config, cli.log_format, cli.log_file.as_deref()) {
        eprintln!("Error: Cannot open log file: {}", e);
        process::exit(2);
    }

    // Initialize API config (global singleton for convenience)
    init_config(RunConfig::from_config(&app_config));

    let code = match &cli.file {
        Some(path) => handle_file(path),
        None => handle_repl(&app_config),
    };
    process::exit(code);
}

/// Explicit config path, else ./abacus.json when present, else defaults
fn resolve_config(explicit: Option<&Path>) -> Result<AbacusConfig, abacus_api::AbacusError> {
    match explicit {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG).exists() => load_config(Path::new(DEFAULT_CONFIG)),
        None => Ok(AbacusConfig::default()),
    }
}

/// Command-line flags win over the config file
fn apply_overrides(config: &mut AbacusConfig, cli: &Cli) {
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.no_arrows {
        config.output.show_arrows = false;
    }
    if let Some(level) = cli.log_level {
        config.logging.global = level;
    }
}

fn handle_file(path: &Path) -> i32 {
    let config = get_config();
    info!(target: "abacus::cli", file = %path.display(), "Tokenizing file");

    match tokenize_file(path, config) {
        Ok(output) => match render_tokens(&output, config.output) {
            Ok(text) => {
                println!("{}", text);
                0
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Err(e) => {
            print_error(&e, config);
            1
        }
    }
}

fn handle_repl(app_config: &AbacusConfig) -> i32 {
    info!(target: "abacus::cli", "Starting shell");
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match repl::run(stdin.lock(), &mut stdout, &app_config.repl, get_config()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
