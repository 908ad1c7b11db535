// Integration tests for the fn compiler

use fncc::codegen::generator::Generator;
use fncc::parser::ast::AstNode;
use fncc::parser::parser::ParseError;
use fncc::parser::{parse, tokenize};
use fncc::snapshot::Stage;
use fncc::transform::target::{Identifier, Node};
use fncc::transform::transform;
use fncc::{compile, compile_traced, CompileError};

#[test]
fn test_compile_example() {
    assert_eq!(compile("fn test(arg){}").unwrap(), "function test(arg){}");
}

#[test]
fn test_bare_identifier() {
    assert_eq!(compile("x").unwrap(), "x");
}

#[test]
fn test_parse_example_shape() {
    let program = parse(tokenize("fn test(arg){}").unwrap()).unwrap();

    assert_eq!(program.body.len(), 1);
    match &program.body[0] {
        AstNode::FunctionDeclaration {
            name, params, body, ..
        } => {
            assert_eq!(name, "test");
            assert_eq!(params.len(), 1);
            assert!(matches!(&params[0], AstNode::Identifier { value, .. } if value == "arg"));
            assert!(body.is_empty());
        }
        other => panic!("expected a declaration, got {:?}", other),
    }
}

#[test]
fn test_nested_declaration_as_param() {
    let output = compile("fn outer(fn inner(){}){}").unwrap();
    assert_eq!(output, "function outer(function inner(){}){}");
}

#[test]
fn test_nested_body_stays_in_body() {
    let program = parse(tokenize("fn f(a){fn g(b){c} d}").unwrap()).unwrap();
    let target = transform(&program).unwrap();

    assert_eq!(
        target.body,
        vec![Node::FunctionDeclaration {
            id: Identifier::new("f"),
            params: vec![Node::identifier("a")],
            body: vec![
                Node::FunctionDeclaration {
                    id: Identifier::new("g"),
                    params: vec![Node::identifier("b")],
                    body: vec![Node::identifier("c")],
                },
                Node::identifier("d"),
            ],
        }]
    );
    assert_eq!(
        Generator::new().generate_program(&target).unwrap(),
        "function f(a){function g(b){c}d}"
    );
}

#[test]
fn test_multiline_source() {
    let source = r#"
        fn main(
            argc
            argv
        ) {
            body
        }
    "#;
    assert_eq!(compile(source).unwrap(), "function main(argc,argv){body}");
}

#[test]
fn test_missing_close_paren_fails() {
    let err = compile("fn test(arg").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::UnexpectedEof { position: 4 })
    ));

    // The brace is read as a parameter and rejected
    let err = compile("fn test(arg{}").unwrap_err();
    assert!(matches!(
        err,
        CompileError::Parse(ParseError::UnexpectedToken { position: 4, .. })
    ));
}

#[test]
fn test_unexpected_character_reported() {
    let err = compile("fn test(a-b){}").unwrap_err();
    assert_eq!(err.stage(), Stage::Lex);
    assert_eq!(
        err.to_string(),
        "Lexer error at line 1, column 10: unexpected character '-'"
    );
}

#[test]
fn test_empty_input_fails() {
    assert!(matches!(
        compile(""),
        Err(CompileError::Parse(ParseError::UnexpectedEof { position: 0 }))
    ));
}

#[test]
fn test_tokens_after_declaration_ignored() {
    assert_eq!(compile("fn f(a){}}").unwrap(), "function f(a){}");
    assert_eq!(compile("x )").unwrap(), "x");
}

#[test]
fn test_keyword_as_declaration_name() {
    assert_eq!(compile("fn fn(a){}").unwrap(), "function fn(a){}");
}

#[test]
fn test_deterministic() {
    let source = "fn a(fn b(c){d} e){f g}";
    let first = compile(source).unwrap();
    for _ in 0..5 {
        assert_eq!(compile(source).unwrap(), first);
    }
}

#[test]
fn test_trace_matches_compile() {
    let source = "fn test(arg){}";
    let trace = compile_traced(source);

    assert_eq!(trace.result, compile(source));
    assert_eq!(trace.completed(), Stage::ALL.len());
    assert_eq!(trace.failed_stage(), None);
}

#[test]
fn test_emitted_json_shapes() {
    let trace = compile_traced("fn f(a){}");

    let tokens = serde_json::to_value(trace.artifacts.tokens.as_ref().unwrap()).unwrap();
    assert_eq!(tokens[0]["kind"], "keyword-fn");
    assert_eq!(tokens[0]["text"], "fn");
    assert_eq!(tokens[2]["kind"], "paren");

    let ast = serde_json::to_value(trace.artifacts.source_ast.as_ref().unwrap()).unwrap();
    assert_eq!(ast["type"], "Program");
    assert_eq!(ast["body"][0]["type"], "FunctionDeclaration");
    assert_eq!(ast["body"][0]["name"], "f");
    assert_eq!(ast["body"][0]["params"][0]["value"], "a");

    let target = serde_json::to_value(trace.artifacts.target_ast.as_ref().unwrap()).unwrap();
    assert_eq!(target["body"][0]["id"]["name"], "f");
    assert_eq!(target["body"][0]["params"][0]["name"], "a");
}
