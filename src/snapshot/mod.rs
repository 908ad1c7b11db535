// Stage snapshots for inspecting a pipeline run

use crate::compiler::errors::CompileError;
use crate::parser::ast::{self, Program};
use crate::parser::lexer::Token;
use crate::transform::target;
use std::fmt;

/// The four pipeline stages, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Lex,
    Parse,
    Transform,
    Generate,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Lex, Stage::Parse, Stage::Transform, Stage::Generate];

    /// Title of the artifact this stage produces
    pub fn artifact(self) -> &'static str {
        match self {
            Stage::Lex => "Tokens",
            Stage::Parse => "Source AST",
            Stage::Transform => "Target AST",
            Stage::Generate => "Output",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lex => write!(f, "lex"),
            Stage::Parse => write!(f, "parse"),
            Stage::Transform => write!(f, "transform"),
            Stage::Generate => write!(f, "generate"),
        }
    }
}

/// Rendered view of one stage's output
#[derive(Debug, Clone, PartialEq)]
pub struct StageSnapshot {
    pub stage: Stage,
    pub lines: Vec<String>,
}

impl StageSnapshot {
    pub fn tokens(tokens: &[Token]) -> Self {
        let lines = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                format!(
                    "{:>3}  {:<10}  {:<6} @{}",
                    index,
                    token.kind.to_string(),
                    token.text,
                    token.location
                )
            })
            .collect();
        StageSnapshot {
            stage: Stage::Lex,
            lines,
        }
    }

    pub fn source_ast(program: &Program) -> Self {
        StageSnapshot {
            stage: Stage::Parse,
            lines: ast::outline(program),
        }
    }

    pub fn target_ast(program: &target::Program) -> Self {
        StageSnapshot {
            stage: Stage::Transform,
            lines: target::outline(program),
        }
    }

    pub fn output(text: &str) -> Self {
        StageSnapshot {
            stage: Stage::Generate,
            lines: text.lines().map(|line| line.to_string()).collect(),
        }
    }
}

/// Intermediate results kept for `--emit` dumps
#[derive(Debug, Clone, Default)]
pub struct Artifacts {
    pub tokens: Option<Vec<Token>>,
    pub source_ast: Option<Program>,
    pub target_ast: Option<target::Program>,
}

/// Record of one pipeline run: a snapshot per completed stage plus the
/// final result
#[derive(Debug, Clone)]
pub struct PipelineTrace {
    pub source: String,
    pub snapshots: Vec<StageSnapshot>,
    pub artifacts: Artifacts,
    pub result: Result<String, CompileError>,
}

impl PipelineTrace {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Number of stages that completed
    pub fn completed(&self) -> usize {
        self.snapshots.len()
    }

    pub fn snapshot(&self, index: usize) -> Option<&StageSnapshot> {
        self.snapshots.get(index)
    }

    /// The stage that failed, if any
    pub fn failed_stage(&self) -> Option<Stage> {
        self.result.as_ref().err().map(CompileError::stage)
    }
}
