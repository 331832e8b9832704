//! Abacus Lexer
//!
//! Single-pass scanner over an in-memory source:
//! - one-ahead cursor with explicit priming
//! - integer/float literal disambiguation
//! - fail-fast on the first illegal character

pub mod arrows;
pub mod error;
pub mod position;
pub mod scanner;
pub mod token;

pub use arrows::underline;
pub use error::{ScanError, ScanErrorKind};
pub use position::Position;
pub use scanner::{is_decimal_digit, Scanner};
pub use token::{Token, TokenKind};

/// Log target for scanner events
pub(crate) const LOG_TARGET: &str = "abacus::lexer";
