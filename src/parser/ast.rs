// AST (Abstract Syntax Tree) definitions for the fn source language

use serde::Serialize;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Node kinds shared by the source and target trees.
///
/// Used as the key of the transformer and generator dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    FunctionDeclaration,
    Identifier,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Program => write!(f, "Program"),
            NodeKind::FunctionDeclaration => write!(f, "FunctionDeclaration"),
            NodeKind::Identifier => write!(f, "Identifier"),
        }
    }
}

/// The root of a parsed source file.
///
/// The grammar has no program-level loop, so `body` always holds exactly
/// one node after a successful parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<AstNode>,
}

impl Program {
    pub fn new() -> Self {
        Program { body: Vec::new() }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

/// Source AST node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AstNode {
    /// `fn name(params){body}`
    ///
    /// `params` and `body` are parsed by the same rule as top-level nodes,
    /// so a parameter may itself be a nested declaration.
    FunctionDeclaration {
        name: String,
        params: Vec<AstNode>,
        body: Vec<AstNode>,
        #[serde(skip)]
        location: SourceLocation,
    },

    Identifier {
        value: String,
        #[serde(skip)]
        location: SourceLocation,
    },
}

impl AstNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            AstNode::FunctionDeclaration { .. } => NodeKind::FunctionDeclaration,
            AstNode::Identifier { .. } => NodeKind::Identifier,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            AstNode::FunctionDeclaration { location, .. } | AstNode::Identifier { location, .. } => {
                *location
            }
        }
    }
}

/// Indented one-node-per-line rendering used by the stage inspector.
pub fn outline(program: &Program) -> Vec<String> {
    let mut lines = vec!["Program".to_string()];
    for node in &program.body {
        outline_node(node, 1, &mut lines);
    }
    lines
}

fn outline_node(node: &AstNode, depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match node {
        AstNode::FunctionDeclaration {
            name,
            params,
            body,
            location,
        } => {
            lines.push(format!("{}FunctionDeclaration {} @{}", pad, name, location));
            lines.push(format!("{}  params:", pad));
            for param in params {
                outline_node(param, depth + 2, lines);
            }
            lines.push(format!("{}  body:", pad));
            for stmt in body {
                outline_node(stmt, depth + 2, lines);
            }
        }
        AstNode::Identifier { value, location } => {
            lines.push(format!("{}Identifier {} @{}", pad, value, location));
        }
    }
}
