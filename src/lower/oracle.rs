//! Binding-time classification
//!
//! The oracle decides, per node, whether the node is compile-time code kept
//! as-is in the meta-program, or run-time code that has to be rebuilt.

use rowan::WalkEvent;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::catalog::NodeClass;
use crate::syntax::{SyntaxKind, SyntaxNode};

/// Binding time of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformationKind {
    /// Compile-time code: emitted as-is, children still visited.
    Keep,
    /// Run-time code: replaced by a reconstruction call.
    Transform,
    /// The oracle has no answer; lowering treats this as a catalog gap.
    Unclassified,
}

/// Classifies nodes for one lowering pass.
///
/// Classification must be free of side effects visible to the pass; the
/// rewriter asks at most once per node.
pub trait BindingTimeOracle {
    fn classify(&self, node: &SyntaxNode) -> TransformationKind;
}

impl<F> BindingTimeOracle for F
where
    F: Fn(&SyntaxNode) -> TransformationKind,
{
    fn classify(&self, node: &SyntaxNode) -> TransformationKind {
        self(node)
    }
}

/// Every node is run-time code.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformAll;

impl BindingTimeOracle for TransformAll {
    fn classify(&self, _node: &SyntaxNode) -> TransformationKind {
        TransformationKind::Transform
    }
}

/// Every node is compile-time code.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepAll;

impl BindingTimeOracle for KeepAll {
    fn classify(&self, _node: &SyntaxNode) -> TransformationKind {
        TransformationKind::Keep
    }
}

/// Keeps expressions built only from declared compile-time names.
///
/// An expression qualifies when it references at least one name and every
/// name it references is compile-time. Everything inside a qualifying
/// expression is kept too; all other nodes are transformed.
#[derive(Debug, Clone, Default)]
pub struct CompileTimeSymbols {
    names: FxHashSet<SmolStr>,
}

impl CompileTimeSymbols {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn declare(&mut self, name: impl Into<SmolStr>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    fn is_compile_time_name(&self, name_ref: &SyntaxNode) -> bool {
        name_ref
            .children_with_tokens()
            .filter_map(|element| element.into_token())
            .find(|token| token.kind() == SyntaxKind::IDENT)
            .is_some_and(|ident| self.contains(ident.text()))
    }

    /// Scan `node`'s subtree, skipping the already scanned child `done`.
    ///
    /// Returns `false` on the first run-time name; `any_name` records
    /// whether a name was seen.
    fn scan(&self, node: &SyntaxNode, done: Option<&SyntaxNode>, any_name: &mut bool) -> bool {
        let mut walk = node.preorder();
        while let Some(event) = walk.next() {
            let WalkEvent::Enter(current) = event else {
                continue;
            };
            if done == Some(&current) {
                walk.skip_subtree();
                continue;
            }
            if current.kind() == SyntaxKind::NAME_REF {
                if !self.is_compile_time_name(&current) {
                    return false;
                }
                *any_name = true;
            }
        }
        true
    }
}

impl BindingTimeOracle for CompileTimeSymbols {
    /// Walks up from `node`, growing the scanned region one ancestor at a
    /// time so no subtree is read twice. A run-time name rules out every
    /// ancestor above it.
    fn classify(&self, node: &SyntaxNode) -> TransformationKind {
        let mut any_name = false;
        let mut current = node.clone();
        let mut done = None;
        loop {
            if !self.scan(&current, done.as_ref(), &mut any_name) {
                return TransformationKind::Transform;
            }
            if any_name && NodeClass::Expr.accepts(current.kind()) {
                return TransformationKind::Keep;
            }
            let Some(parent) = current.parent() else {
                return TransformationKind::Transform;
            };
            done = Some(std::mem::replace(&mut current, parent));
        }
    }
}
