//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// 词法错误（结构化）
pub use abacus_core::{ScanError, ScanErrorKind};

/// Abacus 错误类型
#[derive(Error, Debug)]
pub enum AbacusError {
    /// 词法分析错误（结构化）
    #[error("{0}")]
    Lexer(#[from] ScanError),

    /// Source file could not be read
    #[error("Cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file could not be read or parsed
    #[error("Invalid config '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl AbacusError {
    /// 获取错误行号（1-based，如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            AbacusError::Lexer(e) => Some(e.line()),
            _ => None,
        }
    }

    /// 获取错误列号（1-based，如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            AbacusError::Lexer(e) => Some(e.column()),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            AbacusError::Lexer(_) => "lexer",
            AbacusError::Io { .. } => "io",
            AbacusError::Config { .. } => "config",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// `with_context` attaches the caret-underlined source excerpt for
    /// scan errors.
    pub fn to_report(&self, with_context: bool) -> ErrorReport {
        match self {
            AbacusError::Lexer(e) => ErrorReport {
                phase: "lexer",
                file: Some(e.start.file_name().to_string()),
                line: Some(e.line()),
                column: Some(e.column()),
                error_kind: format!("{:?}", e.kind),
                message: format!("{}: {}", e.kind, e.detail),
                context: with_context.then(|| e.context()),
            },
            AbacusError::Io { path, source } => ErrorReport {
                phase: "io",
                file: Some(path.display().to_string()),
                line: None,
                column: None,
                error_kind: format!("{:?}", source.kind()),
                message: self.to_string(),
                context: None,
            },
            AbacusError::Config { path, .. } => ErrorReport {
                phase: "config",
                file: Some(path.display().to_string()),
                line: None,
                column: None,
                error_kind: "InvalidConfig".to_string(),
                message: self.to_string(),
                context: None,
            },
        }
    }
}

/// 结构化错误报告
///
/// 上层应用（CLI、编辑器插件）可以根据自己的需求格式化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: lexer, io, config
    pub phase: &'static str,
    pub file: Option<String>,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
    /// Source excerpt with `^` markers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(col)) => {
                write!(f, "[{}:{}] {} error: {}", line, col, self.phase, self.message)
            }
            _ => write!(f, "[{}] {} error: {}", self.phase, self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}
