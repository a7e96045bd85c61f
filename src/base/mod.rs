//! Foundation types.
//!
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineIndex`], [`Position`] - Line/column conversion
//! - [`SourceLocation`] - Where a diagnostic points in template source
//!
//! This module has NO dependencies on other crate modules.

mod position;

pub use position::{LineIndex, Position, SourceLocation};

// Re-export text-size types for convenience
pub use text_size;
pub use text_size::{TextRange, TextSize};
