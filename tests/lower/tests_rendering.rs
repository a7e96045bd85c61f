//! Rendered meta-code for representative templates.

#![allow(clippy::unwrap_used)]

use rowan::GreenNodeBuilder;

use quasi::lower::{LowerOptions, TransformAll, TransformationKind, TriviaPolicy, lower};
use quasi::meta::{ArgValue, evaluate};
use quasi::syntax::{SyntaxKind, SyntaxNode};
use quasi::Catalog;

use crate::helpers::oracles::KeepKinds;
use crate::helpers::trees::parse;

// =============================================================================
// FACTORY CALLS
// =============================================================================

#[test]
fn test_binary_expr_with_kept_operands() {
    let root = parse(r#"(BINARY_EXPR (NAME_REF IDENT"a") _ PLUS _ (NAME_REF IDENT"b"))"#);
    let oracle = KeepKinds(&[SyntaxKind::NAME_REF]);

    let lowered = lower(&root, &oracle, &LowerOptions::default()).unwrap();

    assert_eq!(
        lowered.to_string(),
        "make::binary_expr(\n    BinaryOp::Add,\n    a,\n    make::token(SyntaxKind::PLUS),\n    b\n)"
    );
}

#[test]
fn test_empty_block_passes_only_statements() {
    let root = parse("(BLOCK L_BRACE R_BRACE)");

    let lowered = lower(&root, &TransformAll, &LowerOptions::default()).unwrap();

    let call = lowered.as_build().unwrap();
    assert_eq!(call.slot_names(), vec!["statements"]);
    assert_eq!(lowered.to_string(), "make::block(\n    make::list([])\n)");
}

#[test]
fn test_if_without_else_uses_two_argument_shape() {
    let root = parse(
        r#"(IF_STMT IF_KW _ L_PAREN (NAME_REF IDENT"c") R_PAREN _ (BLOCK L_BRACE R_BRACE))"#,
    );

    let lowered = lower(&root, &TransformAll, &LowerOptions::default()).unwrap();

    let call = lowered.as_build().unwrap();
    assert_eq!(call.operation, "if_stmt");
    assert_eq!(call.slot_names(), vec!["condition", "then_branch"]);
    assert!(call.arg("else_clause").is_none());
}

#[test]
fn test_nested_calls_indent_one_level_per_call() {
    let root = parse(r#"(EXPR_STMT (NAME_REF IDENT"x") SEMICOLON)"#);

    let lowered = lower(&root, &TransformAll, &LowerOptions::default()).unwrap();

    assert_eq!(
        lowered.to_string(),
        "make::expr_stmt(\n    make::name_ref(\n        make::ident(\"x\")\n    )\n)"
    );
}

#[test]
fn test_tab_indentation() {
    let root = parse(r#"(EXPR_STMT (NAME_REF IDENT"x") SEMICOLON)"#);
    let options = LowerOptions {
        insert_spaces: false,
        ..LowerOptions::default()
    };

    let lowered = lower(&root, &TransformAll, &options).unwrap();

    assert_eq!(
        lowered.to_string(),
        "make::expr_stmt(\n\tmake::name_ref(\n\t\tmake::ident(\"x\")\n\t)\n)"
    );
}

#[test]
fn test_render_with_factory_module() {
    let root = parse("(THIS_EXPR THIS_KW)");
    let options = LowerOptions {
        factory_module: "syntax::build".to_string(),
        ..LowerOptions::default()
    };

    let lowered = lower(&root, &TransformAll, &options).unwrap();

    assert_eq!(lowered.render(&options.factory_module), "syntax::build::this_expr()");
    assert_eq!(lowered.to_string(), "make::this_expr()");
}

#[test]
fn test_literal_carries_kind_tag_and_text() {
    let root = parse(r#"(LITERAL STRING"\"hi\"")"#);

    let lowered = lower(&root, &TransformAll, &LowerOptions::default()).unwrap();

    assert_eq!(
        lowered.to_string(),
        "make::literal(\n    LiteralKind::String,\n    make::literal(SyntaxKind::STRING, \"\\\"hi\\\"\")\n)"
    );
}

#[test]
fn test_modifier_run_renders_as_tokens() {
    let root = parse(
        r#"(FIELD_DEF PUB_KW _ STATIC_KW _ (NAME IDENT"x") COLON _ (PATH_TYPE (PATH (NAME_REF IDENT"int"))) SEMICOLON)"#,
    );

    let lowered = lower(&root, &KeepKinds(&[SyntaxKind::NAME, SyntaxKind::PATH_TYPE]), &LowerOptions::default())
        .unwrap();

    assert_eq!(
        lowered.to_string(),
        "make::field_def(\n    make::tokens([make::token(SyntaxKind::PUB_KW), make::token(SyntaxKind::STATIC_KW)]),\n    x,\n    int\n)"
    );
}

#[test]
fn test_absent_optional_field_renders_none() {
    let root = parse(r#"(NEW_EXPR NEW_KW _ (PATH_TYPE (PATH (NAME_REF IDENT"Point"))) (OBJECT_INITIALIZER L_BRACE R_BRACE))"#);
    let oracle = KeepKinds(&[SyntaxKind::PATH_TYPE, SyntaxKind::OBJECT_INITIALIZER]);

    let lowered = lower(&root, &oracle, &LowerOptions::default()).unwrap();

    // ty and initializer are the minimal shape; no args slot is passed
    assert_eq!(lowered.as_build().unwrap().slot_names(), vec!["ty", "initializer"]);

    let root = parse(
        r#"(FN_DEF FN_KW _ (NAME IDENT"f") (PARAM_LIST L_PAREN R_PAREN) SEMICOLON)"#,
    );
    let lowered = lower(&root, &KeepKinds(&[SyntaxKind::NAME, SyntaxKind::PARAM_LIST]), &LowerOptions::default())
        .unwrap();
    let call = lowered.as_build().unwrap();
    assert_eq!(call.arg("body"), Some(&ArgValue::Absent));
    assert!(lowered.to_string().contains("    None,\n"));
}

// =============================================================================
// KEPT CODE
// =============================================================================

#[test]
fn test_kept_node_splices_rebuilt_child() {
    let root = parse(
        r#"(CALL_EXPR (NAME_REF IDENT"emit") (ARG_LIST L_PAREN (NAME_REF IDENT"x") R_PAREN))"#,
    );
    let oracle = |node: &SyntaxNode| match node.kind() {
        SyntaxKind::CALL_EXPR | SyntaxKind::ARG_LIST => TransformationKind::Keep,
        SyntaxKind::NAME_REF if node.text() == "emit" => TransformationKind::Keep,
        _ => TransformationKind::Transform,
    };

    let lowered = lower(&root, &oracle, &LowerOptions::default()).unwrap();

    assert!(lowered.as_kept().is_some());
    assert_eq!(
        lowered.to_string(),
        "emit(make::name_ref(\n    make::ident(\"x\")\n))"
    );
}

#[test]
fn test_kept_operand_ending_in_line_comment() {
    // fixtures move trailing trivia to the next token, so build the tree by hand
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::BINARY_EXPR.into());
    builder.start_node(SyntaxKind::NAME_REF.into());
    builder.token(SyntaxKind::IDENT.into(), "a");
    builder.token(SyntaxKind::WHITESPACE.into(), " ");
    builder.token(SyntaxKind::LINE_COMMENT.into(), "// note");
    builder.token(SyntaxKind::WHITESPACE.into(), "\n");
    builder.finish_node();
    builder.token(SyntaxKind::PLUS.into(), "+");
    builder.start_node(SyntaxKind::NAME_REF.into());
    builder.token(SyntaxKind::IDENT.into(), "b");
    builder.finish_node();
    builder.finish_node();
    let root = SyntaxNode::new_root(builder.finish());

    let lowered = lower(&root, &KeepKinds(&[SyntaxKind::NAME_REF]), &LowerOptions::default()).unwrap();

    assert_eq!(
        lowered.to_string(),
        "make::binary_expr(\n    BinaryOp::Add,\n    a // note\n    ,\n    make::token(SyntaxKind::PLUS),\n    b\n)"
    );
}

#[test]
fn test_keep_all_reproduces_source_text() {
    let root = parse(
        r#"(IF_STMT IF_KW _ L_PAREN (NAME_REF IDENT"c") R_PAREN _ (BLOCK L_BRACE / _ _ (RETURN_STMT RETURN_KW SEMICOLON) / R_BRACE))"#,
    );

    let lowered = lower(&root, &quasi::lower::KeepAll, &LowerOptions::default()).unwrap();

    assert_eq!(lowered.to_string(), root.text().to_string());
    assert_eq!(lowered.to_string(), "if (c) {\n  return;\n}");
}

// =============================================================================
// COMMENTS
// =============================================================================

const COMMENTED_RETURN: &str = r#"(RETURN_STMT LINE_COMMENT"// done" / RETURN_KW SEMICOLON)"#;

#[test]
fn test_preserved_comment_forces_explicit_token() {
    let root = parse(COMMENTED_RETURN);
    let options = LowerOptions {
        trivia: TriviaPolicy::PreserveComments,
        ..LowerOptions::default()
    };

    let lowered = lower(&root, &TransformAll, &options).unwrap();

    assert_eq!(
        lowered.to_string(),
        "make::return_stmt(\n    make::with_comments([\"// done\"], make::token(SyntaxKind::RETURN_KW)),\n    None,\n    make::token(SyntaxKind::SEMICOLON)\n)"
    );
    let rebuilt = evaluate(&lowered, Catalog::standard()).unwrap();
    assert_eq!(rebuilt.text().to_string(), "// done\nreturn;");
}

#[test]
fn test_normalized_comment_is_dropped() {
    let root = parse(COMMENTED_RETURN);

    let lowered = lower(&root, &TransformAll, &LowerOptions::default()).unwrap();

    assert_eq!(lowered.to_string(), "make::return_stmt()");
}

#[test]
fn test_comment_inside_child_travels_with_its_token() {
    let root = parse(
        r#"(EXPR_STMT (NAME_REF BLOCK_COMMENT"/* x */" _ IDENT"x") SEMICOLON)"#,
    );
    let options = LowerOptions {
        trivia: TriviaPolicy::PreserveComments,
        ..LowerOptions::default()
    };

    let lowered = lower(&root, &TransformAll, &options).unwrap();

    assert!(lowered.to_string().contains(r#"make::with_comments(["/* x */"], make::ident("x"))"#));
}
