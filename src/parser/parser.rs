//! Recursive descent parser for the fn language
//!
//! The grammar is uniform: a declaration's parameters and body are parsed by
//! the same rule ([`Parser::parse_node`]) as the top-level node, so nested
//! declarations may appear anywhere a node may.
//!
//! # Cursor discipline
//!
//! All recursive calls share one cursor (`Parser::position`), advanced through
//! `&mut self`. Expected punctuation is skipped by position arithmetic, not
//! verified:
//!
//! ```text
//! fn  name  (  <params...>  )  {  <body...>  }
//! ^   ^     ^               ^  ^             ^
//! |   read  skipped         |  skipped       terminator, stepped past
//! |   (kind not checked)    terminator, stepped past
//! consumed
//! ```
//!
//! Malformed input is never repaired. Running off the end of the token
//! sequence is reported as [`ParseError::UnexpectedEof`]; a token of the wrong
//! kind reaching [`Parser::parse_node`] as [`ParseError::UnexpectedToken`].

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A token the node rule does not understand
    #[error(
        "Parse error at line {}, column {}: unexpected {kind} '{text}' (token {position})",
        .location.line, .location.column
    )]
    UnexpectedToken {
        kind: TokenKind,
        text: String,
        position: usize,
        location: SourceLocation,
    },

    /// The cursor ran past the last token
    #[error("Parse error: unexpected end of input (token {position})")]
    UnexpectedEof { position: usize },
}

const CLOSE_PAREN: &str = ")";
const CLOSE_BRACE: &str = "}";

/// Recursive descent parser over a token sequence
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the program: one top-level node. Tokens after it are ignored.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        let node = self.parse_node()?;
        program.body.push(node);

        Ok(program)
    }

    /// Parse the node at the cursor
    pub fn parse_node(&mut self) -> Result<AstNode, ParseError> {
        let token = self.current()?;

        match token.kind {
            TokenKind::KeywordFn => self.parse_function_declaration(),
            TokenKind::Identifier => {
                let node = AstNode::Identifier {
                    value: token.text.clone(),
                    location: token.location,
                };
                self.position += 1;
                Ok(node)
            }
            kind => Err(ParseError::UnexpectedToken {
                kind,
                text: token.text.clone(),
                position: self.position,
                location: token.location,
            }),
        }
    }

    /// Parse `fn name(params){body}`, cursor on `fn`
    fn parse_function_declaration(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current()?.location;
        self.position += 1; // consume 'fn'

        // name kind is not checked
        let name = self.current()?.text.clone();
        self.position += 2; // name and '('

        let params = self.parse_until(CLOSE_PAREN)?;
        self.position += 1; // '{'
        let body = self.parse_until(CLOSE_BRACE)?;

        Ok(AstNode::FunctionDeclaration {
            name,
            params,
            body,
            location,
        })
    }

    /// Collect nodes until the token at the cursor reads `terminator`,
    /// then step past the terminator
    fn parse_until(&mut self, terminator: &str) -> Result<Vec<AstNode>, ParseError> {
        let mut nodes = Vec::new();

        while self.current()?.text != terminator {
            nodes.push(self.parse_node()?);
        }
        self.position += 1;

        Ok(nodes)
    }

    /// Token at the cursor, or end-of-input
    fn current(&self) -> Result<&Token, ParseError> {
        self.tokens.get(self.position).ok_or(ParseError::UnexpectedEof {
            position: self.position,
        })
    }
}

/// Parse a token sequence into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    fn parse_source(source: &str) -> Result<Program, ParseError> {
        parse(tokenize(source).expect("lexing failed"))
    }

    fn ident(node: &AstNode) -> &str {
        match node {
            AstNode::Identifier { value, .. } => value,
            other => panic!("Expected identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_function_declaration() {
        let program = parse_source("fn test(arg){}").unwrap();
        assert_eq!(program.body.len(), 1);

        match &program.body[0] {
            AstNode::FunctionDeclaration {
                name, params, body, ..
            } => {
                assert_eq!(name, "test");
                assert_eq!(params.len(), 1);
                assert_eq!(ident(&params[0]), "arg");
                assert!(body.is_empty());
            }
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_identifier() {
        let program = parse_source("x").unwrap();
        assert_eq!(ident(&program.body[0]), "x");
    }

    #[test]
    fn test_params_and_body() {
        let program = parse_source("fn f(a b c){x y}").unwrap();

        match &program.body[0] {
            AstNode::FunctionDeclaration { params, body, .. } => {
                let params: Vec<_> = params.iter().map(ident).collect();
                let body: Vec<_> = body.iter().map(ident).collect();
                assert_eq!(params, vec!["a", "b", "c"]);
                assert_eq!(body, vec!["x", "y"]);
            }
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_declaration_as_param() {
        let program = parse_source("fn outer(fn inner(){}){}").unwrap();

        match &program.body[0] {
            AstNode::FunctionDeclaration { name, params, .. } => {
                assert_eq!(name, "outer");
                assert!(matches!(
                    &params[0],
                    AstNode::FunctionDeclaration { name, .. } if name == "inner"
                ));
            }
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_opening_punctuation_not_checked() {
        // '(' and '{' are skipped by position only
        let program = parse_source("fn f}a)(b}").unwrap();

        match &program.body[0] {
            AstNode::FunctionDeclaration { params, body, .. } => {
                assert_eq!(ident(&params[0]), "a");
                assert_eq!(ident(&body[0]), "b");
            }
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_name_kind_not_checked() {
        let program = parse_source("fn fn(a){}").unwrap();

        match &program.body[0] {
            AstNode::FunctionDeclaration { name, params, .. } => {
                assert_eq!(name, "fn");
                assert_eq!(ident(&params[0]), "a");
            }
            other => panic!("Expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_close_paren_is_eof() {
        let err = parse_source("fn test(arg").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEof { position: 4 });
    }

    #[test]
    fn test_missing_close_paren_before_brace() {
        let err = parse_source("fn test(arg{}").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                kind: TokenKind::Brace,
                position: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_unexpected_leading_token() {
        let err = parse_source(")").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 1: unexpected paren ')' (token 0)"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            parse(Vec::new()).unwrap_err(),
            ParseError::UnexpectedEof { position: 0 }
        );
    }

    #[test]
    fn test_tokens_after_top_level_node_ignored() {
        let program = parse_source("x y").unwrap();
        assert_eq!(program.body.len(), 1);
        assert_eq!(ident(&program.body[0]), "x");

        // unbalanced closing brace after a complete declaration
        let program = parse_source("fn f(a){}}").unwrap();
        assert_eq!(program.body.len(), 1);
    }
}
