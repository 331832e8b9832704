//! 测试辅助工具
//!
//! Shared helpers for the scanner integration tests.

#![allow(dead_code)]

use abacus_core::{run, ScanError, Token, TokenKind};

pub const FILE_NAME: &str = "test.txt";

/// Scan `code` under the shared test file name
pub fn lex(code: &str) -> Result<Vec<Token>, ScanError> {
    run(FILE_NAME, code)
}

/// Scan and keep only the kinds; panics on a scan error
pub fn kinds(code: &str) -> Vec<TokenKind> {
    lex(code)
        .unwrap_or_else(|e| panic!("unexpected scan error:\n{}", e))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

/// Rebuild the non-whitespace source text from a token list
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| match t.kind.symbol() {
            Some(c) => c.to_string(),
            None => t.text.clone(),
        })
        .collect()
}

/// `"INT:1 PLUS INT:2"` style dump, for compact assertions
pub fn dump(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
