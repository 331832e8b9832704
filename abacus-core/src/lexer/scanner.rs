//! Abacus 扫描器
//!
//! One-ahead scanner: `current` is always the character about to be
//! consumed, and the cursor sits on it. Construction primes the first
//! character; `tokenize` then consumes the scanner.

use super::error::ScanError;
use super::position::Position;
use super::token::{Token, TokenKind};
use super::LOG_TARGET;

use tracing::{debug, trace};

/// Decimal digit test, `0`–`9` only
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Insignificant whitespace between tokens
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// 词法扫描器
pub struct Scanner {
    chars: Vec<char>,
    cursor: Position,
    current: Option<char>,
}

impl Scanner {
    /// Create a scanner positioned on the first character of `text`
    pub fn new(file_name: &str, text: &str) -> Self {
        let mut scanner = Self {
            chars: text.chars().collect(),
            cursor: Position::new(file_name, text),
            current: None,
        };
        scanner.prime();
        scanner
    }

    /// Load the first character. Only called once, from `new`.
    fn prime(&mut self) {
        debug_assert_eq!(self.cursor.index, -1, "scanner primed twice");
        self.advance();
    }

    /// Character about to be consumed; `None` at end of input
    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn cursor(&self) -> &Position {
        &self.cursor
    }

    fn advance(&mut self) {
        self.cursor.advance(self.current);
        self.current = usize::try_from(self.cursor.index)
            .ok()
            .and_then(|i| self.chars.get(i))
            .copied();
    }

    /// Scan the whole input
    ///
    /// Returns every token in source order, or the first illegal character.
    /// Tokens collected before an error are discarded.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ScanError> {
        debug!(
            target: LOG_TARGET,
            file = %self.cursor.file_name,
            chars = self.chars.len(),
            "Starting scan"
        );

        let mut tokens = Vec::new();

        while let Some(c) = self.current {
            if is_blank(c) {
                self.advance();
            } else if is_decimal_digit(c) {
                let token = self.scan_number();
                trace!(target: LOG_TARGET, token = %token, index = self.cursor.index, "Produced token");
                tokens.push(token);
            } else if let Some(kind) = TokenKind::from_symbol(c) {
                trace!(target: LOG_TARGET, token = %kind, index = self.cursor.index, "Produced token");
                tokens.push(Token::new(kind));
                self.advance();
            } else {
                let start = self.cursor.clone();
                self.advance();
                let end = self.cursor.clone();
                debug!(
                    target: LOG_TARGET,
                    ch = ?c,
                    line = start.line_number(),
                    column = start.column,
                    "Illegal character"
                );
                return Err(ScanError::illegal_character(start, end, c));
            }
        }

        debug!(target: LOG_TARGET, count = tokens.len(), "Scan completed");
        Ok(tokens)
    }

    /// 扫描数字（整数或浮点数）
    ///
    /// Accepts digits and at most one `.`. A second `.` ends the literal
    /// without being consumed.
    fn scan_number(&mut self) -> Token {
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.current {
            if c == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !is_decimal_digit(c) {
                break;
            }
            text.push(c);
            self.advance();
        }

        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        Token::with_text(kind, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::ScanErrorKind;

    fn lex(input: &str) -> Vec<Token> {
        Scanner::new("test.txt", input).tokenize().unwrap()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_prime_loads_first_char() {
        let scanner = Scanner::new("test.txt", "42");
        assert_eq!(scanner.current(), Some('4'));
        assert_eq!(scanner.cursor().index, 0);
        assert_eq!(scanner.cursor().column, 0);
        assert_eq!(scanner.cursor().line, 0);
    }

    #[test]
    fn test_prime_empty_input() {
        let scanner = Scanner::new("test.txt", "");
        assert_eq!(scanner.current(), None);
        assert_eq!(scanner.cursor().index, 0);
    }

    #[test]
    fn test_is_decimal_digit() {
        for c in '0'..='9' {
            assert!(is_decimal_digit(c));
        }
        assert!(!is_decimal_digit('.'));
        assert!(!is_decimal_digit('a'));
        // non-ASCII digits are not literals
        assert!(!is_decimal_digit('٣'));
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+-*/()"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::LBracket,
                TokenKind::RBracket,
            ]
        );
    }

    #[test]
    fn test_punctuation_has_empty_text() {
        assert!(lex("+ ( )").iter().all(|t| t.text.is_empty()));
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex("123"), vec![Token::with_text(TokenKind::Int, "123")]);
    }

    #[test]
    fn test_float() {
        assert_eq!(lex("12.5"), vec![Token::with_text(TokenKind::Float, "12.5")]);
    }

    #[test]
    fn test_trailing_point_is_float() {
        assert_eq!(lex("3."), vec![Token::with_text(TokenKind::Float, "3.")]);
        assert_eq!(
            lex("3.+1"),
            vec![
                Token::with_text(TokenKind::Float, "3."),
                Token::new(TokenKind::Plus),
                Token::with_text(TokenKind::Int, "1"),
            ]
        );
    }

    #[test]
    fn test_second_point_stops_literal() {
        let mut scanner = Scanner::new("test.txt", "1..2");
        let token = scanner.scan_number();
        assert_eq!(token, Token::with_text(TokenKind::Float, "1."));
        // the second dot is left for the next token
        assert_eq!(scanner.current(), Some('.'));
        assert_eq!(scanner.cursor().index, 2);
    }

    #[test]
    fn test_second_point_is_illegal() {
        let err = Scanner::new("test.txt", "1..2").tokenize().unwrap_err();
        assert_eq!(err.kind, ScanErrorKind::IllegalCharacter);
        assert_eq!(err.detail, "'.'");
        assert_eq!(err.start.index, 2);
        assert_eq!(err.end.index, 3);
    }

    #[test]
    fn test_leading_point_is_illegal() {
        let err = Scanner::new("test.txt", ".5").tokenize().unwrap_err();
        assert_eq!(err.detail, "'.'");
        assert_eq!(err.start.index, 0);
    }

    #[test]
    fn test_whitespace_skipping() {
        assert_eq!(lex("  3   +   4  "), lex("3+4"));
        assert_eq!(lex("\t3\t*\t4"), lex("3*4"));
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("").is_empty());
        assert!(lex("   \t ").is_empty());
    }

    #[test]
    fn test_illegal_character_position() {
        let err = Scanner::new("test.txt", "3 & 2").tokenize().unwrap_err();
        assert_eq!(err.detail, "'&'");
        assert_eq!(err.start.index, 2);
        assert_eq!(err.start.column, 2);
        assert_eq!(err.end.index, 3);
        assert_eq!(err.end.column, 3);
    }

    #[test]
    fn test_newline_advances_line() {
        let err = Scanner::new("test.txt", "1\n+2&").tokenize().unwrap_err();
        assert_eq!(err.start.line, 1);
        assert_eq!(err.start.column, 2);
        assert_eq!(err.start.index, 4);
        assert!(err.to_string().ends_with("line 2"));
    }

    #[test]
    fn test_crlf_is_blank() {
        assert_eq!(kinds("1\r\n+\r\n2").len(), 3);
    }

    #[test]
    fn test_illegal_unicode_character() {
        let err = Scanner::new("test.txt", "1 + é").tokenize().unwrap_err();
        assert_eq!(err.detail, "'é'");
        assert_eq!(err.start.index, 4);
    }
}
