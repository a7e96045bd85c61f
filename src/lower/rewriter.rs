//! Binding-time rewriter
//!
//! Walks a syntax tree once. Kept nodes are rebuilt structurally with their
//! children lowered in place; transformed nodes are handed to the
//! synthesizer, which calls back into [`Rewriter::visit`] for child fields.

use std::cell::OnceCell;

use rustc_hash::FxHashMap;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use super::error::{LowerError, LowerResult};
use super::indent::IndentationState;
use super::options::LowerOptions;
use super::oracle::{BindingTimeOracle, TransformationKind};
use super::synthesizer;
use crate::base::{LineIndex, SourceLocation, TextSize};
use crate::catalog::{Catalog, CatalogGap};
use crate::meta::{KeptChild, KeptNode, Lowered};
use crate::syntax::{NodeOrToken, SyntaxNode};

/// State of one lowering pass.
pub struct Rewriter<'a> {
    oracle: &'a dyn BindingTimeOracle,
    options: &'a LowerOptions,
    catalog: &'a Catalog,
    cancel: Option<CancellationToken>,
    /// Classification of every node visited so far
    classified: FxHashMap<SyntaxNode, TransformationKind>,
    /// Current visit nesting
    depth: usize,
    /// Built on the first error that needs a location
    line_index: OnceCell<LineIndex>,
}

impl<'a> Rewriter<'a> {
    pub fn new(oracle: &'a dyn BindingTimeOracle, options: &'a LowerOptions) -> Self {
        Self {
            oracle,
            options,
            catalog: Catalog::standard(),
            cancel: None,
            classified: FxHashMap::default(),
            depth: 0,
            line_index: OnceCell::new(),
        }
    }

    /// Lower against another catalog.
    pub fn with_catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Check `cancel` at every visit.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn options(&self) -> &'a LowerOptions {
        self.options
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Number of nodes visited in the current pass.
    pub fn visited_count(&self) -> usize {
        self.classified.len()
    }

    /// Lower the tree rooted at `root` in a fresh pass.
    pub fn lower(
        &mut self,
        root: &SyntaxNode,
        indent: &mut IndentationState,
    ) -> LowerResult<Lowered> {
        self.classified.clear();
        self.depth = 0;
        self.line_index = OnceCell::new();
        self.visit(root, indent)
    }

    /// Lower one node and everything below it.
    pub fn visit(
        &mut self,
        node: &SyntaxNode,
        indent: &mut IndentationState,
    ) -> LowerResult<Lowered> {
        if self
            .cancel
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            trace!("cancelled before {:?}", node.kind());
            return Err(LowerError::Cancelled);
        }
        if self.depth >= self.options.max_depth {
            return Err(LowerError::DepthLimitExceeded {
                limit: self.options.max_depth,
                location: self.locate(node),
            });
        }

        self.depth += 1;
        let result = self.dispatch(node, indent);
        self.depth -= 1;
        result
    }

    fn dispatch(
        &mut self,
        node: &SyntaxNode,
        indent: &mut IndentationState,
    ) -> LowerResult<Lowered> {
        let classification = self.classify(node);
        trace!(
            "visit {:?} at depth {} -> {:?}",
            node.kind(),
            self.depth,
            classification
        );
        match classification {
            TransformationKind::Keep => self.keep(node, indent),
            TransformationKind::Transform => synthesizer::synthesize(self, node, indent),
            TransformationKind::Unclassified => {
                Err(LowerError::catalog(node.kind(), CatalogGap::Unclassified))
            }
        }
    }

    fn classify(&mut self, node: &SyntaxNode) -> TransformationKind {
        debug_assert!(
            !self.classified.contains_key(node),
            "{:?} at {:?} visited twice",
            node.kind(),
            node.text_range()
        );
        let oracle = self.oracle;
        *self
            .classified
            .entry(node.clone())
            .or_insert_with(|| oracle.classify(node))
    }

    fn keep(&mut self, node: &SyntaxNode, indent: &mut IndentationState) -> LowerResult<Lowered> {
        let mut children = Vec::new();
        for element in node.children_with_tokens() {
            children.push(match element {
                NodeOrToken::Token(token) => KeptChild::Token {
                    kind: token.kind(),
                    text: token.text().into(),
                },
                NodeOrToken::Node(child) => KeptChild::Node(self.visit(&child, indent)?),
            });
        }
        Ok(Lowered::Kept(KeptNode {
            kind: node.kind(),
            children,
        }))
    }

    /// Line and column of `node` in its tree, ignoring leading trivia.
    pub(crate) fn locate(&self, node: &SyntaxNode) -> SourceLocation {
        let start = node
            .descendants_with_tokens()
            .filter_map(NodeOrToken::into_token)
            .find(|token| !token.kind().is_trivia())
            .map_or(node.text_range().start(), |token| token.text_range().start());
        self.locate_offset(node, start)
    }

    pub(crate) fn locate_offset(&self, node: &SyntaxNode, offset: TextSize) -> SourceLocation {
        let index = self.line_index.get_or_init(|| {
            let root = node.ancestors().last().unwrap_or_else(|| node.clone());
            LineIndex::new(&root.text().to_string())
        });
        SourceLocation::new(node.text_range(), index.position(offset))
    }
}
