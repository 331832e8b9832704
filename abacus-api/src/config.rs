//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use abacus_config::{AbacusConfig, OutputFormat};
use once_cell::sync::OnceCell;

/// Scan configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Attach the caret-underlined source excerpt to error reports
    pub show_arrows: bool,
    /// How callers should render token lists
    pub output: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_config(&AbacusConfig::default())
    }
}

impl RunConfig {
    pub fn from_config(config: &AbacusConfig) -> Self {
        Self {
            show_arrows: config.output.show_arrows,
            output: config.output.format,
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Initialize with `config` unless another caller got there first
pub(crate) fn get_or_init(config: impl FnOnce() -> RunConfig) -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(config)
}
