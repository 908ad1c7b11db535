//! # Introduction
//!
//! fncc compiles a tiny function-declaration language into JavaScript-style
//! function syntax:
//!
//! ```
//! assert_eq!(fncc::compile("fn test(arg){}").unwrap(), "function test(arg){}");
//! ```
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser → Source AST → Transformer → Target AST → Generator → Output
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds the source AST.
//! 2. [`transform`]: rebuilds the tree in the target shape, dispatching on
//!    node kind.
//! 3. [`codegen`]: renders the target tree to text.
//! 4. [`compiler`]: runs the stages in order; [`compile`] is the single entry
//!    point.
//! 5. [`snapshot`]: per-stage views of a run, used by the inspector.
//! 6. [`ui`]: ratatui-based stage inspector; not part of the stable library
//!    API.
//!
//! ## Source language
//!
//! ```text
//! node := "fn" NAME "(" node* ")" "{" node* "}" | IDENT
//! ```
//!
//! Names are ASCII letters only. Parameters and body nodes are separated by
//! whitespace. A program is one node; tokens after it are ignored.

pub mod codegen;
pub mod compiler;
pub mod parser;
pub mod snapshot;
pub mod transform;
pub mod ui;

pub use compiler::{compile, compile_traced, CompileError};
