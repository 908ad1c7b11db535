//! Pipeline driver
//!
//! Sequences the four stages:
//!
//! ```text
//! text → tokenize → parse → transform → generate → text
//! ```
//!
//! Each stage is a pure function of its input. [`compile`] returns the first
//! error unchanged; [`compile_traced`] additionally records a
//! [`StageSnapshot`] after each stage that completes.

pub mod errors;

use crate::codegen::generator::Generator;
use crate::parser::lexer::tokenize;
use crate::parser::parser::parse;
use crate::snapshot::{Artifacts, PipelineTrace, StageSnapshot};
use crate::transform::transformer::Transformer;

pub use errors::CompileError;

/// Compile fn source text into its target rendering.
pub fn compile(text: &str) -> Result<String, CompileError> {
    let tokens = tokenize(text)?;
    let program = parse(tokens)?;
    let transformed = Transformer::new().transform(&program)?;
    let output = Generator::new().generate_program(&transformed)?;
    Ok(output)
}

/// Compile `text`, keeping a snapshot of every completed stage.
pub fn compile_traced(text: &str) -> PipelineTrace {
    let mut snapshots = Vec::new();
    let mut artifacts = Artifacts::default();
    let result = run_traced(text, &mut snapshots, &mut artifacts);

    PipelineTrace {
        source: text.to_string(),
        snapshots,
        artifacts,
        result,
    }
}

fn run_traced(
    text: &str,
    snapshots: &mut Vec<StageSnapshot>,
    artifacts: &mut Artifacts,
) -> Result<String, CompileError> {
    let tokens = tokenize(text)?;
    snapshots.push(StageSnapshot::tokens(&tokens));
    artifacts.tokens = Some(tokens.clone());

    let program = parse(tokens)?;
    snapshots.push(StageSnapshot::source_ast(&program));

    let transformed = Transformer::new().transform(&program);
    artifacts.source_ast = Some(program);
    let transformed = transformed?;
    snapshots.push(StageSnapshot::target_ast(&transformed));

    let output = Generator::new().generate_program(&transformed);
    artifacts.target_ast = Some(transformed);
    let output = output?;
    snapshots.push(StageSnapshot::output(&output));

    Ok(output)
}
