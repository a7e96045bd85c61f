//! Binding-time lowering
//!
//! Turns a template syntax tree into meta-code:
//! - [`BindingTimeOracle`] - decides Keep vs Transform per node
//! - [`Rewriter`] - visits every node once, keeping or transforming it
//! - the synthesizer - picks the smallest factory shape for a transformed node
//! - [`IndentationState`] - layout depth of emitted arguments
//! - [`batch`] - many templates in parallel
//!
//! Lowering never modifies the input tree. Any error discards the output of
//! the whole pass.

pub mod batch;
mod error;
mod fields;
mod indent;
mod options;
mod oracle;
mod rewriter;
mod synthesizer;

use tokio_util::sync::CancellationToken;

use crate::meta::Lowered;
use crate::syntax::SyntaxNode;

pub use error::{LowerError, LowerResult};
pub use indent::{IndentScope, IndentationState};
pub use options::{LowerOptions, TriviaPolicy};
pub use oracle::{BindingTimeOracle, CompileTimeSymbols, KeepAll, TransformAll, TransformationKind};
pub use rewriter::Rewriter;

/// Lower the tree rooted at `root`.
pub fn lower(
    root: &SyntaxNode,
    oracle: &dyn BindingTimeOracle,
    options: &LowerOptions,
) -> LowerResult<Lowered> {
    Rewriter::new(oracle, options).lower(root, &mut IndentationState::new())
}

/// Lower the tree rooted at `root`, giving up once `cancel` fires.
pub fn lower_cancellable(
    root: &SyntaxNode,
    oracle: &dyn BindingTimeOracle,
    options: &LowerOptions,
    cancel: &CancellationToken,
) -> LowerResult<Lowered> {
    Rewriter::new(oracle, options)
        .with_cancellation(cancel.clone())
        .lower(root, &mut IndentationState::new())
}
