//! Abacus Token 类型定义

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // 字面量
    #[serde(rename = "INT")]
    Int,
    #[serde(rename = "FLOAT")]
    Float,

    // 单字符符号
    #[serde(rename = "PLUS")]
    Plus,
    #[serde(rename = "MINUS")]
    Minus,
    #[serde(rename = "MUL")]
    Mul,
    #[serde(rename = "DIV")]
    Div,
    #[serde(rename = "LBRACKET")]
    LBracket,
    #[serde(rename = "RBRACKET")]
    RBracket,
}

impl TokenKind {
    /// Display name, as used in token dumps
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
        }
    }

    /// Kind for a single-character operator or bracket
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Mul),
            '/' => Some(TokenKind::Div),
            '(' => Some(TokenKind::LBracket),
            ')' => Some(TokenKind::RBracket),
            _ => None,
        }
    }

    /// Source character of a punctuation kind; `None` for literals
    pub fn symbol(&self) -> Option<char> {
        match self {
            TokenKind::Int | TokenKind::Float => None,
            TokenKind::Plus => Some('+'),
            TokenKind::Minus => Some('-'),
            TokenKind::Mul => Some('*'),
            TokenKind::Div => Some('/'),
            TokenKind::LBracket => Some('('),
            TokenKind::RBracket => Some(')'),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token 结构
///
/// `text` holds the verbatim literal for `Int`/`Float` and is empty for
/// punctuation. Numeric parsing is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Punctuation token (no text)
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }

    /// Literal token
    pub fn with_text(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}:{}", self.kind, self.text)
        }
    }
}
