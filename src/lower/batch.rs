//! Parallel lowering of independent templates
//!
//! Red trees are not `Send`, so templates cross threads as green trees and
//! every worker builds its own root and rewriter state.

use rayon::prelude::*;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::error::LowerResult;
use super::indent::IndentationState;
use super::options::LowerOptions;
use super::oracle::BindingTimeOracle;
use super::rewriter::Rewriter;
use crate::meta::Lowered;
use crate::syntax::{GreenNode, SyntaxNode};

/// Lower every template in parallel; results keep the input order.
pub fn lower_all(
    templates: &[GreenNode],
    oracle: &(dyn BindingTimeOracle + Sync),
    options: &LowerOptions,
) -> Vec<LowerResult<Lowered>> {
    run(templates, oracle, options, None)
}

/// Like [`lower_all`], stopping every pass once `cancel` fires.
pub fn lower_all_cancellable(
    templates: &[GreenNode],
    oracle: &(dyn BindingTimeOracle + Sync),
    options: &LowerOptions,
    cancel: &CancellationToken,
) -> Vec<LowerResult<Lowered>> {
    run(templates, oracle, options, Some(cancel))
}

fn run(
    templates: &[GreenNode],
    oracle: &(dyn BindingTimeOracle + Sync),
    options: &LowerOptions,
    cancel: Option<&CancellationToken>,
) -> Vec<LowerResult<Lowered>> {
    debug!("lowering {} template(s)", templates.len());
    templates
        .par_iter()
        .map(|green| {
            let root = SyntaxNode::new_root(green.clone());
            let mut rewriter = Rewriter::new(oracle, options);
            if let Some(cancel) = cancel {
                rewriter = rewriter.with_cancellation(cancel.clone());
            }
            rewriter.lower(&root, &mut IndentationState::new())
        })
        .collect()
}
