//! CLI 配置
//!
//! Maps the serde-level logging config onto `tracing` levels and targets.

use abacus_config::{LogLevel, LoggingConfig, Phase};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
    pub api: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from(&LoggingConfig::default())
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(cfg: &LoggingConfig) -> Self {
        Self {
            global: to_tracing(cfg.global),
            lexer: cfg.lexer.map(to_tracing),
            api: cfg.api.map(to_tracing),
        }
    }
}

impl LogConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Lexer => self.lexer.unwrap_or(self.global),
            Phase::Api => self.api.unwrap_or(self.global),
            Phase::Cli => self.global,
        }
    }
}

pub fn to_tracing(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Parse log level string
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    match s.to_lowercase().as_str() {
        "silent" => Ok(LogLevel::Error), // silent = only errors
        "error" => Ok(LogLevel::Error),
        "warn" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        other => Err(format!(
            "unknown log level '{}' (expected silent, error, warn, info, debug or trace)",
            other
        )),
    }
}
