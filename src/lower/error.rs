//! Error types for lowering.

use thiserror::Error;

use crate::base::SourceLocation;
use crate::catalog::CatalogGap;
use crate::syntax::SyntaxKind;

/// Errors that abort a lowering pass.
///
/// Every error discards the partial output of the whole pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    /// The catalog or the oracle does not cover a node that has to be rebuilt.
    #[error("catalog incomplete for {kind:?}: {gap}")]
    CatalogIncomplete { kind: SyntaxKind, gap: CatalogGap },

    /// The node holds something the catalog did not anticipate.
    #[error("unsupported {kind:?} at {location}: {detail}")]
    UnsupportedConstruct {
        kind: SyntaxKind,
        location: SourceLocation,
        detail: String,
    },

    /// The tree nests deeper than `LowerOptions::max_depth`.
    #[error("nesting deeper than {limit} levels at {location}")]
    DepthLimitExceeded {
        limit: usize,
        location: SourceLocation,
    },

    #[error("lowering was cancelled")]
    Cancelled,
}

impl LowerError {
    /// Create a catalog gap error.
    pub fn catalog(kind: SyntaxKind, gap: CatalogGap) -> Self {
        Self::CatalogIncomplete { kind, gap }
    }

    /// Create an unsupported construct error.
    pub fn unsupported(
        kind: SyntaxKind,
        location: SourceLocation,
        detail: impl Into<String>,
    ) -> Self {
        Self::UnsupportedConstruct {
            kind,
            location,
            detail: detail.into(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type for lowering operations.
pub type LowerResult<T> = Result<T, LowerError>;
