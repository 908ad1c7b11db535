// Target AST: the shape the generator renders

use crate::parser::ast::NodeKind;
use serde::Serialize;

/// Root of the transformed tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

/// Target AST node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// The declaration name is a first-class [`Identifier`] node.
    FunctionDeclaration {
        id: Identifier,
        params: Vec<Node>,
        body: Vec<Node>,
    },
    Identifier { name: String },
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::FunctionDeclaration { .. } => NodeKind::FunctionDeclaration,
            Node::Identifier { .. } => NodeKind::Identifier,
        }
    }

    /// Shorthand for a declaration with no params or body yet.
    pub fn function(name: impl Into<String>) -> Self {
        Node::FunctionDeclaration {
            id: Identifier::new(name),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier { name: name.into() }
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

fn outline_node(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(depth);
    match node {
        Node::FunctionDeclaration { id, params, body } => {
            lines.push(format!("{}FunctionDeclaration", pad));
            lines.push(format!("{}  id: Identifier {}", pad, id.name));
            lines.push(format!("{}  params:", pad));
            for param in params {
                outline_node(param, depth + 2, lines);
            }
            lines.push(format!("{}  body:", pad));
            for stmt in body {
                outline_node(stmt, depth + 2, lines);
            }
        }
        Node::Identifier { name } => lines.push(format!("{}Identifier {}", pad, name)),
    }
}
