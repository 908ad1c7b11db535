//! fn source parser
//!
//! This module transforms source text into the source Abstract Syntax Tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Grammar
//!
//! ```text
//! node := "fn" NAME "(" node* ")" "{" node* "}"
//!       | IDENT
//! ```
//!
//! Parameters are whitespace-delimited; there are no separators, literals or
//! operators. The program is a single `node`; tokens after it are ignored.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent over a shared cursor.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use lexer::tokenize;
pub use parser::parse;
