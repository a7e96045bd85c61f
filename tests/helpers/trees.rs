//! Tree construction and inspection helpers.

use quasi::meta::{ArgValue, KeptChild, Lowered};
use quasi::syntax::{SyntaxKind, SyntaxNode, TreeBuilder, fixture};

/// Build a tree from notation, panicking with the notation on failure.
pub fn parse(notation: &str) -> SyntaxNode {
    fixture::tree(notation).unwrap_or_else(|e| panic!("bad notation {notation}: {e}"))
}

/// `((((x))))` nested `depth` times.
pub fn nested_parens(depth: usize) -> SyntaxNode {
    let mut builder = TreeBuilder::new();
    for _ in 0..depth {
        builder.start_node(SyntaxKind::PAREN_EXPR);
        builder.fixed(SyntaxKind::L_PAREN);
    }
    builder.start_node(SyntaxKind::NAME_REF);
    builder.token(SyntaxKind::IDENT, "x");
    builder.finish_node();
    for _ in 0..depth {
        builder.fixed(SyntaxKind::R_PAREN);
        builder.finish_node();
    }
    builder.finish_root()
}

/// A source file of `count` statements `s0; s1; ...`.
pub fn statements(count: usize) -> SyntaxNode {
    let mut builder = TreeBuilder::new();
    builder.start_node(SyntaxKind::SOURCE_FILE);
    for index in 0..count {
        if index > 0 {
            builder.whitespace("\n");
        }
        builder.start_node(SyntaxKind::EXPR_STMT);
        builder.start_node(SyntaxKind::NAME_REF);
        builder.token(SyntaxKind::IDENT, &format!("s{index}"));
        builder.finish_node();
        builder.fixed(SyntaxKind::SEMICOLON);
        builder.finish_node();
    }
    builder.finish_node();
    builder.finish_root()
}

/// Run `f` on a thread with a 64 MiB stack.
pub fn with_large_stack<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(64 << 20)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}

/// Number of kept and rebuilt nodes in a lowered value.
pub fn count_lowered(value: &Lowered) -> (usize, usize) {
    let mut counts = (0, 0);
    walk(value, &mut counts);
    counts
}

fn walk(value: &Lowered, counts: &mut (usize, usize)) {
    match value {
        Lowered::Kept(node) => {
            counts.0 += 1;
            for child in &node.children {
                if let KeptChild::Node(inner) = child {
                    walk(inner, counts);
                }
            }
        }
        Lowered::Build(call) => {
            counts.1 += 1;
            for arg in &call.args {
                match &arg.value {
                    ArgValue::Node(inner) => walk(inner, counts),
                    ArgValue::List(list) => {
                        for element in &list.elements {
                            walk(&element.value, counts);
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}
