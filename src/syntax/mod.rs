//! Template syntax trees
//!
//! Lossless rowan CST for the template grammar:
//! - [`SyntaxKind`] - closed enumeration of token and node kinds
//! - [`TreeBuilder`] - green tree construction with the trivia convention
//! - [`fixture`] - compact tree notation for tests and tooling
//!
//! Trees are immutable and shared; lowering only reads them.

mod builder;
pub mod fixture;
mod syntax_kind;

pub use builder::TreeBuilder;
pub use syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TemplateLanguage};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, NodeOrToken, TextRange, TextSize};

/// Leading comment trivia of a child element.
///
/// Collects the contiguous run of trivia siblings directly before `element`
/// and keeps only the comments, in source order. Zero-width tokens do not
/// break the run.
pub fn leading_comments(element: &SyntaxElement) -> Vec<SyntaxToken> {
    let mut comments = Vec::new();
    let mut cursor = match element {
        NodeOrToken::Node(node) => node.prev_sibling_or_token(),
        NodeOrToken::Token(token) => token.prev_sibling_or_token(),
    };
    while let Some(NodeOrToken::Token(prev)) = cursor {
        if prev.kind().is_comment() {
            comments.push(prev.clone());
        } else if !prev.kind().is_trivia() && !prev.text().is_empty() {
            break;
        }
        cursor = prev.prev_sibling_or_token();
    }
    comments.reverse();
    comments
}

/// Compare two trees ignoring trivia.
///
/// Equal when both have the same kind, the same sequence of non-trivia
/// children, and identical token text.
pub fn structurally_equal(left: &SyntaxNode, right: &SyntaxNode) -> bool {
    if left.kind() != right.kind() {
        return false;
    }
    let mut lhs = significant_children(left);
    let mut rhs = significant_children(right);
    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return true,
            (Some(NodeOrToken::Node(a)), Some(NodeOrToken::Node(b))) => {
                if !structurally_equal(&a, &b) {
                    return false;
                }
            }
            (Some(NodeOrToken::Token(a)), Some(NodeOrToken::Token(b))) => {
                if a.kind() != b.kind() || a.text() != b.text() {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Children of `node` that are not trivia and not zero-width tokens.
pub fn significant_children(node: &SyntaxNode) -> impl Iterator<Item = SyntaxElement> {
    node.children_with_tokens().filter(|element| match element {
        NodeOrToken::Token(token) => !token.kind().is_trivia() && !token.text().is_empty(),
        NodeOrToken::Node(_) => true,
    })
}
