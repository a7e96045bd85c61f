//! Green tree construction
//!
//! Wraps `rowan::GreenNodeBuilder` and enforces the trivia convention used by
//! the whole crate: the leading trivia of a token is stored as sibling trivia
//! tokens immediately preceding it, inside the token's parent.

use rowan::{GreenNode, GreenNodeBuilder};
use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::SyntaxNode;

/// Builder for template syntax trees.
///
/// Trivia pushed with [`TreeBuilder::trivia`] is queued and only emitted when
/// the next token arrives, so it always lands in that token's parent node.
/// Trivia still queued when the outermost node closes is emitted at the end
/// of that node.
pub struct TreeBuilder {
    inner: GreenNodeBuilder<'static>,
    pending_trivia: Vec<(SyntaxKind, SmolStr)>,
    depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            inner: GreenNodeBuilder::new(),
            pending_trivia: Vec::new(),
            depth: 0,
        }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        debug_assert!(kind.is_node(), "{kind:?} is not a node kind");
        self.inner.start_node(kind.into());
        self.depth += 1;
    }

    pub fn finish_node(&mut self) {
        if self.depth == 1 {
            self.flush_trivia();
        }
        self.inner.finish_node();
        self.depth -= 1;
    }

    /// Queue a trivia token (whitespace or comment).
    pub fn trivia(&mut self, kind: SyntaxKind, text: impl Into<SmolStr>) {
        debug_assert!(kind.is_trivia(), "{kind:?} is not trivia");
        self.pending_trivia.push((kind, text.into()));
    }

    pub fn whitespace(&mut self, text: impl Into<SmolStr>) {
        self.trivia(SyntaxKind::WHITESPACE, text);
    }

    /// Add a token with explicit text, preceded by any queued trivia.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        self.flush_trivia();
        self.inner.token(kind.into(), text);
    }

    /// Add a keyword or punctuation token using its fixed text.
    ///
    /// Kinds without fixed text produce a zero-width token.
    pub fn fixed(&mut self, kind: SyntaxKind) {
        self.token(kind, kind.fixed_text().unwrap_or(""));
    }

    fn flush_trivia(&mut self) {
        for (kind, text) in std::mem::take(&mut self.pending_trivia) {
            self.inner.token(kind.into(), &text);
        }
    }

    pub fn finish(self) -> GreenNode {
        self.inner.finish()
    }

    /// Finish and wrap the tree in a root `SyntaxNode`.
    pub fn finish_root(self) -> SyntaxNode {
        SyntaxNode::new_root(self.finish())
    }
}
