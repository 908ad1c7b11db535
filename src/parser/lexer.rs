//! Lexer (tokenizer) for fn source text
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser in a single forward pass. Recognized classes:
//!
//! - runs of ASCII letters (`fn` becomes [`TokenKind::KeywordFn`], anything
//!   else an [`TokenKind::Identifier`])
//! - `(` / `)` as [`TokenKind::Paren`], `{` / `}` as [`TokenKind::Brace`]
//! - whitespace, which is skipped
//!
//! Any other character aborts tokenization with a [`LexError`].

use super::ast::SourceLocation;
use serde::Serialize;
use std::fmt;

/// Token classes produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    #[serde(rename = "keyword-fn")]
    KeywordFn,
    #[serde(rename = "identifier")]
    Identifier,
    #[serde(rename = "paren")]
    Paren,
    #[serde(rename = "brace")]
    Brace,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::KeywordFn => write!(f, "keyword-fn"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Paren => write!(f, "paren"),
            TokenKind::Brace => write!(f, "brace"),
        }
    }
}

/// A classified lexical unit.
///
/// `location` points at the token's first character so that parse errors can
/// report a line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Token {
            kind,
            text: text.into(),
            location,
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Lexer error at line {}, column {}: unexpected character {character:?}", .location.line, .location.column)]
pub struct LexError {
    pub character: char,
    pub location: SourceLocation,
}

/// Reserved word introducing a function declaration.
const KEYWORD_FN: &str = "fn";

/// Lexer for fn source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            tokens.push(self.next_token(ch)?);
        }

        Ok(tokens)
    }

    /// Get next token, starting at `ch`
    fn next_token(&mut self, ch: char) -> Result<Token, LexError> {
        let loc = self.current_location();

        match ch {
            'a'..='z' | 'A'..='Z' => Ok(self.word()),

            '(' | ')' => {
                self.advance();
                Ok(Token::new(TokenKind::Paren, ch, loc))
            }
            '{' | '}' => {
                self.advance();
                Ok(Token::new(TokenKind::Brace, ch, loc))
            }

            _ => Err(LexError {
                character: ch,
                location: loc,
            }),
        }
    }

    /// Consume a maximal run of ASCII letters as a keyword or identifier
    fn word(&mut self) -> Token {
        let loc = self.current_location();
        let mut word = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if word == KEYWORD_FN {
            TokenKind::KeywordFn
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, word, loc)
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Tokenize `text` in one pass.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).tokenize()
}
