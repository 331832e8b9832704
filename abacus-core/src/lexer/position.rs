//! Source position tracking
//!
//! A cursor over the source, one step per consumed character:
//! - index: characters consumed so far (Unicode scalar values, not bytes)
//! - line/column: 0-based, for diagnostics (display adds 1 to the line)

use std::sync::Arc;

/// Source cursor
///
/// Starts one step before the first character (`index == -1`), so the
/// scanner's first `advance` lands on index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Characters consumed so far; -1 before priming
    pub index: isize,
    /// Line number, 0-based
    pub line: usize,
    /// Column number, 0-based; -1 before priming
    pub column: isize,
    pub file_name: Arc<str>,
    /// The whole input, shared read-only with every copy of the cursor
    pub source_text: Arc<str>,
}

impl Position {
    /// Pre-start sentinel for a source
    pub fn new(file_name: impl Into<Arc<str>>, source_text: impl Into<Arc<str>>) -> Self {
        Self {
            index: -1,
            line: 0,
            column: -1,
            file_name: file_name.into(),
            source_text: source_text.into(),
        }
    }

    /// Step over one consumed character
    ///
    /// `None` means end of input; index and column still move so the
    /// cursor ends one past the last character.
    pub fn advance(&mut self, consumed: Option<char>) {
        self.index += 1;
        self.column += 1;

        if consumed == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
    }

    /// 1-based line number, for messages
    pub fn line_number(&self) -> usize {
        self.line + 1
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
