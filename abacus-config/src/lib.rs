//! Abacus Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Abacus crates.

use serde::Deserialize;

/// Pipeline phase, used to route log levels to per-phase targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Api,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Api => "api",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("abacus::{}", self.as_str())
    }
}

/// Log verbosity, ordered from quietest to noisiest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Warn
    }
}

/// Logging configuration
///
/// Per-phase levels fall back to `global` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub global: LogLevel,
    pub lexer: Option<LogLevel>,
    pub api: Option<LogLevel>,
}

impl LoggingConfig {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Api => self.api.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

/// Interactive shell settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Prompt printed before each line is read
    pub prompt: String,
    /// File name reported in diagnostics for shell input
    pub file_name: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "basic > ".to_string(),
            file_name: "<stdin>".to_string(),
        }
    }
}

/// How token lists are written out
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Underline the offending source span below error messages
    pub show_arrows: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_arrows: true,
        }
    }
}

/// Top-level configuration, as read from `abacus.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AbacusConfig {
    pub logging: LoggingConfig,
    pub repl: ReplConfig,
    pub output: OutputConfig,
}

impl AbacusConfig {
    /// Parse a JSON document; missing sections take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
