//! Source AST → target AST transformation
//!
//! Construction is driven by a dispatch table keyed by [`NodeKind`]. A rule
//! builds the target node for one source node on entry (pre-order); the
//! node's children are then visited with an explicit insertion point:
//!
//! - top-level nodes are appended to the new program's `body`
//! - a declaration's params are appended to its target `params`
//! - a declaration's body nodes are appended to its target `body`
//!
//! The insertion point is threaded through [`Transformer::visit`] as a
//! `&mut Vec<Node>`; each target list receives only the nodes of its own
//! source list.

use crate::parser::ast::{AstNode, NodeKind, Program};
use crate::transform::target::{self, Node};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// No construction rule registered for this kind
    #[error("Transform error: no rule for {kind} nodes")]
    NoRule { kind: NodeKind },

    /// A rule built a node that cannot hold the source node's children
    #[error("Transform error: rule for {kind} built a {built} node, which has no params/body")]
    NoInsertionPoint { kind: NodeKind, built: NodeKind },
}

/// Builds the target node for one source node, without its children.
pub type TransformRule = fn(&AstNode) -> Result<Node, TransformError>;

pub struct Transformer {
    rules: FxHashMap<NodeKind, TransformRule>,
}

impl Transformer {
    /// Transformer with the default rules for every source node kind
    pub fn new() -> Self {
        let mut rules: FxHashMap<NodeKind, TransformRule> = FxHashMap::default();
        rules.insert(NodeKind::FunctionDeclaration, function_declaration);
        rules.insert(NodeKind::Identifier, identifier);
        Transformer { rules }
    }

    pub fn with_rule(mut self, kind: NodeKind, rule: TransformRule) -> Self {
        self.rules.insert(kind, rule);
        self
    }

    pub fn without_rule(mut self, kind: NodeKind) -> Self {
        self.rules.remove(&kind);
        self
    }

    pub fn transform(&self, program: &Program) -> Result<target::Program, TransformError> {
        let mut transformed = target::Program::new();

        for node in &program.body {
            self.visit(node, &mut transformed.body)?;
        }

        Ok(transformed)
    }

    /// Construct `node`, append it at `insertion`, then visit its children
    fn visit(&self, node: &AstNode, insertion: &mut Vec<Node>) -> Result<(), TransformError> {
        let kind = node.kind();
        let rule = self
            .rules
            .get(&kind)
            .ok_or(TransformError::NoRule { kind })?;

        insertion.push(rule(node)?);

        let AstNode::FunctionDeclaration { params, body, .. } = node else {
            return Ok(());
        };

        let Some(built) = insertion.last_mut() else {
            return Ok(());
        };

        match built {
            Node::FunctionDeclaration {
                params: target_params,
                body: target_body,
                ..
            } => {
                for param in params {
                    self.visit(param, target_params)?;
                }
                for stmt in body {
                    self.visit(stmt, target_body)?;
                }
                Ok(())
            }
            _ if params.is_empty() && body.is_empty() => Ok(()),
            other => Err(TransformError::NoInsertionPoint {
                kind,
                built: other.kind(),
            }),
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}

fn function_declaration(node: &AstNode) -> Result<Node, TransformError> {
    match node {
        AstNode::FunctionDeclaration { name, .. } => Ok(Node::function(name.clone())),
        other => Err(TransformError::NoRule { kind: other.kind() }),
    }
}

fn identifier(node: &AstNode) -> Result<Node, TransformError> {
    match node {
        AstNode::Identifier { value, .. } => Ok(Node::identifier(value.clone())),
        other => Err(TransformError::NoRule { kind: other.kind() }),
    }
}

/// Transform with the default rule table.
pub fn transform(program: &Program) -> Result<target::Program, TransformError> {
    Transformer::new().transform(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse, tokenize};
    use crate::transform::target::Identifier;

    fn source(text: &str) -> Program {
        parse(tokenize(text).unwrap()).unwrap()
    }

    #[test]
    fn test_function_declaration() {
        let transformed = transform(&source("fn test(arg){}")).unwrap();

        assert_eq!(
            transformed.body,
            vec![Node::FunctionDeclaration {
                id: Identifier::new("test"),
                params: vec![Node::identifier("arg")],
                body: vec![],
            }]
        );
    }

    #[test]
    fn test_bare_identifier() {
        let transformed = transform(&source("x")).unwrap();
        assert_eq!(transformed.body, vec![Node::identifier("x")]);
    }

    #[test]
    fn test_body_children_stay_in_body() {
        let transformed = transform(&source("fn f(a){b c}")).unwrap();

        assert_eq!(
            transformed.body,
            vec![Node::FunctionDeclaration {
                id: Identifier::new("f"),
                params: vec![Node::identifier("a")],
                body: vec![Node::identifier("b"), Node::identifier("c")],
            }]
        );
    }

    #[test]
    fn test_siblings_after_nested_declaration() {
        // `b` follows a nested declaration in the same param list and must
        // land beside it, not inside it.
        let transformed = transform(&source("fn f(fn g(x){y} b){z}")).unwrap();

        assert_eq!(
            transformed.body,
            vec![Node::FunctionDeclaration {
                id: Identifier::new("f"),
                params: vec![
                    Node::FunctionDeclaration {
                        id: Identifier::new("g"),
                        params: vec![Node::identifier("x")],
                        body: vec![Node::identifier("y")],
                    },
                    Node::identifier("b"),
                ],
                body: vec![Node::identifier("z")],
            }]
        );
    }

    #[test]
    fn test_missing_rule() {
        let transformer = Transformer::new().without_rule(NodeKind::Identifier);
        let err = transformer.transform(&source("fn f(a){}")).unwrap_err();

        assert_eq!(
            err,
            TransformError::NoRule {
                kind: NodeKind::Identifier
            }
        );
        assert_eq!(err.to_string(), "Transform error: no rule for Identifier nodes");
    }

    #[test]
    fn test_custom_rule_without_insertion_point() {
        fn flatten(node: &AstNode) -> Result<Node, TransformError> {
            match node {
                AstNode::FunctionDeclaration { name, .. } => Ok(Node::identifier(name.clone())),
                other => Err(TransformError::NoRule { kind: other.kind() }),
            }
        }

        let transformer = Transformer::new().with_rule(NodeKind::FunctionDeclaration, flatten);

        // childless declarations can be flattened
        let transformed = transformer.transform(&source("fn f(){}")).unwrap();
        assert_eq!(transformed.body, vec![Node::identifier("f")]);

        // but children would have nowhere to go
        let err = transformer.transform(&source("fn f(a){}")).unwrap_err();
        assert_eq!(
            err,
            TransformError::NoInsertionPoint {
                kind: NodeKind::FunctionDeclaration,
                built: NodeKind::Identifier,
            }
        );
    }
}
