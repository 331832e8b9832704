//! API 类型定义
//!
//! 扫描的输出类型。

use abacus_core::Token;
use serde::Serialize;
use std::fmt;

/// 扫描输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenOutput {
    /// File name the tokens were scanned under
    pub file_name: String,
    pub tokens: Vec<Token>,
}

impl TokenOutput {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TokenOutput {
    /// `[INT:1, PLUS, INT:2]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", token)?;
        }
        f.write_str("]")
    }
}
