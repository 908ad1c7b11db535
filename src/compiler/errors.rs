//! Compile error type
//!
//! [`CompileError`] wraps the error of whichever stage failed. Every stage
//! fails fast on its first error; nothing is retried or recovered.

use crate::codegen::generator::GenerationError;
use crate::parser::ast::SourceLocation;
use crate::parser::lexer::LexError;
use crate::parser::parser::ParseError;
use crate::snapshot::Stage;
use crate::transform::transformer::TransformError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl CompileError {
    /// The pipeline stage that failed
    pub fn stage(&self) -> Stage {
        match self {
            CompileError::Lex(_) => Stage::Lex,
            CompileError::Parse(_) => Stage::Parse,
            CompileError::Transform(_) => Stage::Transform,
            CompileError::Generation(_) => Stage::Generate,
        }
    }

    /// Source position of the offending character or token, when known
    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            CompileError::Lex(err) => Some(err.location),
            CompileError::Parse(ParseError::UnexpectedToken { location, .. }) => Some(*location),
            CompileError::Parse(ParseError::UnexpectedEof { .. }) => None,
            CompileError::Transform(_) | CompileError::Generation(_) => None,
        }
    }
}
