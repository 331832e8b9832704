//! Abacus API - Scan orchestration layer
//!
//! Provides unified scanning interface, including:
//! - Source loading (strings and files)
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (AbacusError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `tokenize(file_name, source, &config)` API.

use std::path::Path;
use tracing::{debug, info};

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

pub mod error;
pub mod types;
pub use error::{AbacusError, ErrorReport, ScanError, ScanErrorKind};
pub use types::TokenOutput;

// Re-export config and core types
pub use abacus_config;
pub use abacus_config::{AbacusConfig, OutputFormat, Phase};
pub use abacus_core::{Token, TokenKind};

const LOG_TARGET: &str = "abacus::api";

/// Scan a source string with explicit configuration
///
/// This is the recommended API for library users.
pub fn tokenize(
    file_name: &str,
    source: &str,
    config: &RunConfig,
) -> Result<TokenOutput, AbacusError> {
    info!(target: LOG_TARGET, file = file_name, "Starting scan");
    debug!(target: LOG_TARGET, ?config, bytes = source.len(), "Scan configuration");

    let tokens = abacus_core::run(file_name, source)?;

    info!(target: LOG_TARGET, count = tokens.len(), "Scan completed");
    Ok(TokenOutput {
        file_name: file_name.to_string(),
        tokens,
    })
}

/// Read and scan a file; the path is used as the diagnostic file name
pub fn tokenize_file(path: &Path, config: &RunConfig) -> Result<TokenOutput, AbacusError> {
    let source = std::fs::read_to_string(path).map_err(|source| AbacusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tokenize(&path.display().to_string(), &source, config)
}

/// Read an `abacus.json` config file
pub fn load_config(path: &Path) -> Result<AbacusConfig, AbacusError> {
    let content = std::fs::read_to_string(path).map_err(|e| AbacusError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    AbacusConfig::from_json_str(&content).map_err(|e| AbacusError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

// ==================== Global config API ====================

/// Scan using the global config
///
/// # Panics
/// If global config is not initialized
pub fn scan(file_name: &str, source: &str) -> Result<TokenOutput, AbacusError> {
    tokenize(file_name, source, get_config())
}

/// Quick scan of shell input with default config (auto-initializes if needed)
pub fn quick_tokenize(source: &str) -> Result<TokenOutput, AbacusError> {
    let config = config::get_or_init(RunConfig::default);
    tokenize("<stdin>", source, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Temp file removed on drop
    struct TempFile(std::path::PathBuf);

    impl TempFile {
        fn new(name: &str, content: &str) -> Self {
            let path = std::env::temp_dir().join(format!("abacus-{}-{}", std::process::id(), name));
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(content.as_bytes()).unwrap();
            Self(path)
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn test_tokenize_with_explicit_config() {
        let out = tokenize("test.txt", "(1 + 2) * 3.5", &RunConfig::default()).unwrap();
        assert_eq!(out.file_name, "test.txt");
        assert_eq!(out.tokens.len(), 7);
        assert_eq!(
            out.to_string(),
            "[LBRACKET, INT:1, PLUS, INT:2, RBRACKET, MUL, FLOAT:3.5]"
        );
    }

    #[test]
    fn test_tokenize_error() {
        let err = tokenize("test.txt", "1 + a", &RunConfig::default()).unwrap_err();
        assert!(matches!(err, AbacusError::Lexer(_)));
        assert_eq!(err.column(), Some(5));
    }

    #[test]
    fn test_tokenize_file() {
        let file = TempFile::new("ok.abc", "4 / 2\n- 1");
        let out = tokenize_file(&file.0, &RunConfig::default()).unwrap();
        assert_eq!(out.tokens.len(), 5);
        assert_eq!(out.file_name, file.0.display().to_string());
    }

    #[test]
    fn test_tokenize_file_error_names_file() {
        let file = TempFile::new("bad.abc", "1\n2 ! 3");
        let err = tokenize_file(&file.0, &RunConfig::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&format!("File {}, line 2", file.0.display())));
    }

    #[test]
    fn test_tokenize_file_missing() {
        let path = std::env::temp_dir().join("abacus-definitely-missing.abc");
        let err = tokenize_file(&path, &RunConfig::default()).unwrap_err();
        assert_eq!(err.phase(), "io");
    }

    #[test]
    fn test_load_config() {
        let file = TempFile::new("abacus.json", r#"{ "output": { "show_arrows": false } }"#);
        let cfg = load_config(&file.0).unwrap();
        assert!(!cfg.output.show_arrows);
    }

    #[test]
    fn test_load_config_invalid() {
        let file = TempFile::new("broken.json", "{ not json");
        let err = load_config(&file.0).unwrap_err();
        assert_eq!(err.phase(), "config");
    }

    #[test]
    fn test_quick_tokenize() {
        let out = quick_tokenize("2 * 2").unwrap();
        assert_eq!(out.file_name, "<stdin>");
        assert_eq!(out.tokens.len(), 3);
        assert!(is_initialized());
        // the global config is usable after auto-init
        assert!(scan("x.txt", "1").is_ok());
    }
}
