//! Abacus Core - Lexical analysis (pure logic, no IO)
//!
//! Turns arithmetic source text into a flat token sequence, tracking the
//! line/column/index of every consumed character for diagnostics.
//!
//! Only operates on in-memory strings, no file IO or terminal output.
//!
//! # Quick Start
//!
//! ```
//! use abacus_core::{run, TokenKind};
//!
//! let tokens = run("<doc>", "(1 + 2) * 3.5").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::LBracket);
//! assert_eq!(tokens[6].text, "3.5");
//! ```

pub mod lexer;

// Re-export common types
pub use lexer::{
    is_decimal_digit, underline, Position, ScanError, ScanErrorKind, Scanner, Token, TokenKind,
};

/// Scan `text` in one call
///
/// Equivalent to building a [`Scanner`] and calling [`Scanner::tokenize`].
pub fn run(file_name: &str, text: &str) -> Result<Vec<Token>, ScanError> {
    Scanner::new(file_name, text).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_success() {
        let tokens = run("test.txt", "1 + 2").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Plus);
    }

    #[test]
    fn test_run_error() {
        let err = run("test.txt", "1 $ 2").unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::IllegalCharacter);
        assert_eq!(err.detail, "'$'");
    }
}
