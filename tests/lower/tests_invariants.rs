//! Properties every lowering pass keeps.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use rstest::rstest;

use quasi::base::Position;
use quasi::lower::{
    BindingTimeOracle, CompileTimeSymbols, IndentationState, KeepAll, LowerError, LowerOptions,
    Rewriter, TransformAll, TransformationKind, lower,
};
use quasi::syntax::{SyntaxKind, SyntaxNode};

use crate::helpers::oracles::{KeepKinds, Recording};
use crate::helpers::samples::SAMPLES;
use crate::helpers::trees::{count_lowered, nested_parens, parse, with_large_stack};

// =============================================================================
// DETERMINISM
// =============================================================================

#[test]
fn test_lowering_is_deterministic() {
    let oracle = CompileTimeSymbols::new(["a", "i"]);
    let options = LowerOptions::default();
    for (kind, notation) in SAMPLES {
        let first = lower(&parse(notation), &oracle, &options).unwrap();
        let second = lower(&parse(notation), &oracle, &options).unwrap();
        assert_eq!(first, second, "{kind:?}");
        assert_eq!(first.to_string(), second.to_string(), "{kind:?}");
    }
}

#[test]
fn test_reused_rewriter_matches_fresh_one() {
    let options = LowerOptions::default();
    let mut rewriter = Rewriter::new(&TransformAll, &options);
    for (kind, notation) in SAMPLES {
        let root = parse(notation);
        let reused = rewriter.lower(&root, &mut IndentationState::new()).unwrap();
        let fresh = lower(&root, &TransformAll, &options).unwrap();
        assert_eq!(reused, fresh, "{kind:?}");
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

#[rstest]
#[case::transform_all(&TransformAll)]
#[case::keep_all(&KeepAll)]
#[case::keep_names(&KeepKinds(&[SyntaxKind::NAME, SyntaxKind::NAME_REF]))]
#[case::compile_time_symbols(&CompileTimeSymbols::new(["a", "x", "xs"]))]
fn test_every_node_follows_its_classification(#[case] oracle: &dyn BindingTimeOracle) {
    let options = LowerOptions::default();
    for (kind, notation) in SAMPLES {
        let root = parse(notation);
        let mut rewriter = Rewriter::new(oracle, &options);

        let lowered = rewriter.lower(&root, &mut IndentationState::new()).unwrap();

        let expected_kept = root
            .descendants()
            .filter(|node| oracle.classify(node) == TransformationKind::Keep)
            .count();
        let total = root.descendants().count();
        assert_eq!(rewriter.visited_count(), total, "{kind:?}");
        assert_eq!(count_lowered(&lowered), (expected_kept, total - expected_kept), "{kind:?}");
    }
}

#[test]
fn test_oracle_is_asked_once_per_node() {
    for (kind, notation) in SAMPLES {
        let root = parse(notation);
        let oracle = Recording::default();

        lower(&root, &oracle, &LowerOptions::default()).unwrap();

        let seen = oracle.seen.lock().unwrap();
        let distinct: HashSet<&SyntaxNode> = seen.iter().collect();
        assert_eq!(seen.len(), distinct.len(), "{kind:?} asked twice");
        assert_eq!(seen.len(), root.descendants().count(), "{kind:?}");
    }
}

// =============================================================================
// INDENTATION
// =============================================================================

#[test]
fn test_indentation_balanced_after_success() {
    let options = LowerOptions::default();
    let mut state = IndentationState::new();
    for (_, notation) in SAMPLES {
        Rewriter::new(&TransformAll, &options)
            .lower(&parse(notation), &mut state)
            .unwrap();
        assert_eq!(state.depth(), 0);
    }
}

#[test]
fn test_indentation_balanced_after_failure() {
    let root = parse(
        r#"(BLOCK L_BRACE (EXPR_STMT (CALL_EXPR (NAME_REF IDENT"f") (ARG_LIST L_PAREN (ERROR IDENT"?") R_PAREN)) SEMICOLON) R_BRACE)"#,
    );
    let options = LowerOptions::default();
    let mut state = IndentationState::new();
    let mut outer = state.push();
    let mut inner = outer.push();

    let result = Rewriter::new(&TransformAll, &options).lower(&root, &mut inner);

    assert!(matches!(result, Err(LowerError::UnsupportedConstruct { .. })));
    assert_eq!(inner.depth(), 2);
    drop(inner);
    drop(outer);
    assert_eq!(state.depth(), 0);
}

#[test]
fn test_lowering_starts_at_current_depth() {
    let root = parse(r#"(NAME_REF IDENT"x")"#);
    let options = LowerOptions::default();
    let mut state = IndentationState::new();
    let mut outer = state.push();
    let mut inner = outer.push();

    let lowered = Rewriter::new(&TransformAll, &options)
        .lower(&root, &mut inner)
        .unwrap();

    assert_eq!(
        lowered.to_string(),
        "make::name_ref(\n            make::ident(\"x\")\n        )"
    );
    assert_eq!(inner.depth(), 2);
}

// =============================================================================
// DEPTH LIMIT
// =============================================================================

#[test]
fn test_deep_nesting_hits_depth_limit() {
    let err = with_large_stack(|| {
        let root = nested_parens(10_000);
        lower(&root, &TransformAll, &LowerOptions::default()).unwrap_err()
    });

    let LowerError::DepthLimitExceeded { limit, location } = err else {
        panic!("expected depth limit, got {err:?}");
    };
    assert_eq!(limit, 256);
    assert_eq!(location.start, Position::new(0, 256));
    assert_eq!(u32::from(location.range.start()), 256);
}

#[test]
fn test_depth_limit_boundary() {
    // 255 parentheses plus the name are exactly 256 nested visits
    let deepest_allowed = with_large_stack(|| {
        lower(&nested_parens(255), &TransformAll, &LowerOptions::default()).is_ok()
    });
    assert!(deepest_allowed);

    let err = with_large_stack(|| {
        lower(&nested_parens(256), &TransformAll, &LowerOptions::default()).unwrap_err()
    });
    assert!(matches!(
        err,
        LowerError::DepthLimitExceeded { limit: 256, location } if location.start == Position::new(0, 256)
    ));
}

#[test]
fn test_moderate_nesting_succeeds() {
    let lowered = with_large_stack(|| {
        let root = nested_parens(100);
        lower(&root, &TransformAll, &LowerOptions::default()).map(|lowered| count_lowered(&lowered))
    });
    assert_eq!(lowered, Ok((0, 101)));
}

#[test]
fn test_custom_depth_limit() {
    let root = parse(r#"(EXPR_STMT (NAME_REF IDENT"x") SEMICOLON)"#);
    let options = LowerOptions {
        max_depth: 1,
        ..LowerOptions::default()
    };

    let err = lower(&root, &TransformAll, &options).unwrap_err();

    assert!(matches!(err, LowerError::DepthLimitExceeded { limit: 1, .. }));
    assert_eq!(err.to_string(), "nesting deeper than 1 levels at 1:1");

    let options = LowerOptions {
        max_depth: 2,
        ..LowerOptions::default()
    };
    assert!(lower(&root, &TransformAll, &options).is_ok());
}
