//! # quasi-core
//!
//! Staged-compilation core for template code generation.
//!
//! Template source mixes compile-time code with run-time code. Lowering walks
//! a template's syntax tree, asks an oracle which nodes are compile-time, and
//! replaces every run-time node with meta-code that rebuilds it through AST
//! factory calls.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! lower     → Rewriter, synthesizer, oracles, batch lowering
//!   ↓
//! meta      → Lowered output, rendering, evaluation
//!   ↓
//! catalog   → Kind -> constructor-shape table
//!   ↓
//! syntax    → SyntaxKind, rowan trees, tree builder, fixtures
//!   ↓
//! base      → Primitives (TextRange, LineIndex, SourceLocation)
//! ```
//!
//! ## Example
//!
//! ```
//! use quasi::lower::{LowerOptions, TransformationKind, lower};
//! use quasi::syntax::{SyntaxKind, SyntaxNode, fixture::tree};
//!
//! let root = tree(r#"(BINARY_EXPR (NAME_REF IDENT"a") _ PLUS _ (NAME_REF IDENT"b"))"#).unwrap();
//! let oracle = |node: &SyntaxNode| match node.kind() {
//!     SyntaxKind::NAME_REF => TransformationKind::Keep,
//!     _ => TransformationKind::Transform,
//! };
//! let lowered = lower(&root, &oracle, &LowerOptions::default()).unwrap();
//! assert!(lowered.to_string().starts_with("make::binary_expr("));
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → catalog → meta → lower)
// ============================================================================

/// Foundation types: TextRange, LineIndex, SourceLocation
pub mod base;

/// Syntax: SyntaxKind, rowan tree aliases, builder, tree notation
pub mod syntax;

/// Kind -> constructor-shape catalog
pub mod catalog;

/// Meta-code: lowering output, rendering and evaluation
pub mod meta;

/// Binding-time lowering: rewriter, synthesizer, oracles
pub mod lower;

// Re-export the lowering entry points
pub use catalog::Catalog;
pub use lower::{BindingTimeOracle, LowerError, LowerOptions, LowerResult, TransformationKind, lower};
pub use meta::Lowered;
