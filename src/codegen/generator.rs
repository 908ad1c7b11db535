//! Target AST → output text
//!
//! Rendering rules:
//!
//! | Node                  | Output                                   |
//! |-----------------------|------------------------------------------|
//! | `Program`             | children joined by `\n`                  |
//! | `Identifier`          | its name                                 |
//! | `FunctionDeclaration` | `function <id>(<p1>,<p2>){<b1><b2>}`     |
//!
//! Parameters are comma-joined with no spaces; body nodes are concatenated
//! with no separator.

use crate::parser::ast::NodeKind;
use crate::transform::target::{Node, Program};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation error: no rendering rule for {kind} nodes")]
    NoRule { kind: NodeKind },
}

/// Renders one node; recursive rules call back into the generator.
pub type RenderRule = fn(&Generator, &Node) -> Result<String, GenerationError>;

pub struct Generator {
    rules: FxHashMap<NodeKind, RenderRule>,
}

impl Generator {
    pub fn new() -> Self {
        let mut rules: FxHashMap<NodeKind, RenderRule> = FxHashMap::default();
        rules.insert(NodeKind::FunctionDeclaration, function_declaration);
        rules.insert(NodeKind::Identifier, identifier);
        Generator { rules }
    }

    pub fn without_rule(mut self, kind: NodeKind) -> Self {
        self.rules.remove(&kind);
        self
    }

    pub fn generate_program(&self, program: &Program) -> Result<String, GenerationError> {
        let rendered = self.generate_all(&program.body)?;
        Ok(rendered.join("\n"))
    }

    pub fn generate(&self, node: &Node) -> Result<String, GenerationError> {
        let kind = node.kind();
        let rule = self
            .rules
            .get(&kind)
            .ok_or(GenerationError::NoRule { kind })?;
        rule(self, node)
    }

    fn generate_all(&self, nodes: &[Node]) -> Result<Vec<String>, GenerationError> {
        nodes.iter().map(|node| self.generate(node)).collect()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

fn function_declaration(generator: &Generator, node: &Node) -> Result<String, GenerationError> {
    let Node::FunctionDeclaration { id, params, body } = node else {
        return Err(GenerationError::NoRule { kind: node.kind() });
    };

    let id = generator.generate(&Node::identifier(id.name.clone()))?;
    let params = generator.generate_all(params)?.join(",");
    let body = generator.generate_all(body)?.concat();

    Ok(format!("function {}({}){{{}}}", id, params, body))
}

fn identifier(_: &Generator, node: &Node) -> Result<String, GenerationError> {
    match node {
        Node::Identifier { name } => Ok(name.clone()),
        other => Err(GenerationError::NoRule { kind: other.kind() }),
    }
}

/// Render a target program with the default rules.
pub fn generate(program: &Program) -> Result<String, GenerationError> {
    Generator::new().generate_program(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::target::Identifier;

    fn function(name: &str, params: Vec<Node>, body: Vec<Node>) -> Node {
        Node::FunctionDeclaration {
            id: Identifier::new(name),
            params,
            body,
        }
    }

    #[test]
    fn test_identifier() {
        let program = Program {
            body: vec![Node::identifier("x")],
        };
        assert_eq!(generate(&program).unwrap(), "x");
    }

    #[test]
    fn test_function_declaration() {
        let program = Program {
            body: vec![function("test", vec![Node::identifier("arg")], vec![])],
        };
        insta::assert_snapshot!(generate(&program).unwrap(), @"function test(arg){}");
    }

    #[test]
    fn test_params_comma_joined_body_concatenated() {
        let program = Program {
            body: vec![function(
                "f",
                vec![Node::identifier("a"), Node::identifier("b")],
                vec![Node::identifier("x"), Node::identifier("y")],
            )],
        };
        assert_eq!(generate(&program).unwrap(), "function f(a,b){xy}");
    }

    #[test]
    fn test_nested_declaration_in_params() {
        let program = Program {
            body: vec![function(
                "outer",
                vec![function("inner", vec![], vec![])],
                vec![],
            )],
        };
        assert_eq!(
            generate(&program).unwrap(),
            "function outer(function inner(){}){}"
        );
    }

    #[test]
    fn test_program_joins_with_newline() {
        let program = Program {
            body: vec![Node::identifier("a"), Node::identifier("b")],
        };
        assert_eq!(generate(&program).unwrap(), "a\nb");
    }

    #[test]
    fn test_missing_rule() {
        let generator = Generator::new().without_rule(NodeKind::FunctionDeclaration);
        let program = Program {
            body: vec![function("f", vec![], vec![])],
        };

        assert_eq!(
            generator.generate_program(&program).unwrap_err(),
            GenerationError::NoRule {
                kind: NodeKind::FunctionDeclaration
            }
        );
    }
}
