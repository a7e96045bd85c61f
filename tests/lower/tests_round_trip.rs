//! Lowered meta-code evaluates back to the tree it came from.

#![allow(clippy::unwrap_used)]

use rstest::rstest;

use quasi::lower::{
    BindingTimeOracle, CompileTimeSymbols, KeepAll, LowerOptions, TransformAll, TriviaPolicy, lower,
};
use quasi::meta::evaluate;
use quasi::syntax::{SyntaxKind, structurally_equal};
use quasi::Catalog;

use crate::helpers::samples::SAMPLES;
use crate::helpers::trees::parse;

fn assert_round_trips(oracle: &dyn BindingTimeOracle, options: &LowerOptions) {
    for (kind, notation) in SAMPLES {
        let root = parse(notation);
        assert_eq!(root.kind(), *kind, "sample root of {notation}");

        let lowered = lower(&root, oracle, options)
            .unwrap_or_else(|e| panic!("{kind:?} failed to lower: {e}"));
        let rebuilt = evaluate(&lowered, Catalog::standard())
            .unwrap_or_else(|e| panic!("{kind:?} failed to evaluate: {e}\n{lowered}"));

        assert!(
            structurally_equal(&root, &rebuilt),
            "{kind:?} did not round trip\nsource: {}\nrebuilt: {}\nmeta-code:\n{lowered}",
            root.text(),
            rebuilt.text()
        );
    }
}

#[test]
fn test_samples_cover_every_reconstructible_kind() {
    let mut sampled: Vec<SyntaxKind> = SAMPLES.iter().map(|(kind, _)| *kind).collect();
    sampled.sort();
    sampled.dedup();

    let mut reconstructible: Vec<SyntaxKind> = Catalog::standard()
        .entries()
        .map(|entry| entry.kind)
        .filter(|kind| *kind != SyntaxKind::ERROR)
        .collect();
    reconstructible.sort();

    assert_eq!(sampled, reconstructible);
    assert_eq!(sampled.len(), SAMPLES.len(), "duplicate sample kinds");
}

#[rstest]
#[case::normalize(TriviaPolicy::Normalize)]
#[case::preserve_comments(TriviaPolicy::PreserveComments)]
fn test_transform_all_round_trips(#[case] trivia: TriviaPolicy) {
    let options = LowerOptions {
        trivia,
        ..LowerOptions::default()
    };
    assert_round_trips(&TransformAll, &options);
}

#[test]
fn test_keep_all_round_trips() {
    assert_round_trips(&KeepAll, &LowerOptions::default());
}

#[test]
fn test_mixed_binding_times_round_trip() {
    let oracle = CompileTimeSymbols::new(["a", "x", "i", "xs"]);
    assert_round_trips(&oracle, &LowerOptions::default());
}

#[test]
fn test_non_default_tokens_survive() {
    // `const` instead of the synthesized `var`, and an explicit trailing comma
    let root = parse(
        r#"(BLOCK L_BRACE (LET_STMT CONST_KW _ (NAME IDENT"n") _ EQ _ (ARRAY_EXPR L_BRACK (LITERAL INT_NUMBER"1") COMMA R_BRACK) SEMICOLON) R_BRACE)"#,
    );

    let lowered = lower(&root, &TransformAll, &LowerOptions::default()).unwrap();
    let rebuilt = evaluate(&lowered, Catalog::standard()).unwrap();

    assert_eq!(rebuilt.text().to_string(), "{constn=[1,];}");
    assert!(structurally_equal(&root, &rebuilt));
}

#[test]
fn test_commented_tokens_round_trip_with_comments() {
    let root = parse(
        r#"(ARG_LIST L_PAREN (NAME_REF IDENT"a") COMMA BLOCK_COMMENT"/* last */" _ (NAME_REF IDENT"b") R_PAREN)"#,
    );
    let options = LowerOptions {
        trivia: TriviaPolicy::PreserveComments,
        ..LowerOptions::default()
    };

    let lowered = lower(&root, &TransformAll, &options).unwrap();
    let rebuilt = evaluate(&lowered, Catalog::standard()).unwrap();

    assert!(structurally_equal(&root, &rebuilt));
    assert_eq!(rebuilt.text().to_string(), "(a,/* last */b)");
}
