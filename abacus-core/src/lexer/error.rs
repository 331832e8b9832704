//! Lexer 错误类型
//!
//! The scan stops at the first character it cannot classify and reports
//! the span it covered together with a quoted copy of the character.

use super::arrows::underline;
use super::position::Position;
use std::fmt;
use thiserror::Error;

/// 错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// 非法字符
    IllegalCharacter,
}

impl ScanErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ScanErrorKind::IllegalCharacter => "Illegal Character",
        }
    }
}

impl fmt::Display for ScanErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 词法错误
///
/// Renders as the two-line message:
///
/// ```text
/// Illegal Character: '&'
/// File test.txt, line 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {detail}\nFile {file}, line {line}", file = .start.file_name, line = .start.line + 1)]
pub struct ScanError {
    pub start: Position,
    pub end: Position,
    pub kind: ScanErrorKind,
    /// Human text, e.g. the offending character in quotes
    pub detail: String,
}

impl ScanError {
    pub fn illegal_character(start: Position, end: Position, c: char) -> Self {
        Self {
            start,
            end,
            kind: ScanErrorKind::IllegalCharacter,
            detail: format!("'{}'", c),
        }
    }

    /// 1-based line of the error start
    pub fn line(&self) -> usize {
        self.start.line_number()
    }

    /// 1-based column of the error start
    pub fn column(&self) -> usize {
        self.start.column.max(0) as usize + 1
    }

    /// Same as the `Display` output
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Source lines covered by the error, with `^` under the offending span
    pub fn context(&self) -> String {
        underline(&self.start.source_text, &self.start, &self.end)
    }
}
