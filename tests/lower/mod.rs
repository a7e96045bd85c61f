//! Lowering tests
//!
//! End-to-end tests of the binding-time rewriter:
//! - Rendered meta-code for representative templates
//! - Round trips through evaluation for every node kind
//! - Constructor shape selection
//! - Pass invariants (determinism, indentation, depth, classification)
//! - Error reporting and cancellation
//! - Parallel batch lowering

pub mod tests_invariants;
pub mod tests_rendering;
pub mod tests_round_trip;
