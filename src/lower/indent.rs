//! Indentation depth of emitted meta-code
//!
//! Every reconstruction pushes one level for its arguments. The push returns
//! a scope guard, so the depth is restored on every exit path, including
//! early returns through `?`.

use std::ops::{Deref, DerefMut};

/// Current indentation depth of a lowering pass.
#[derive(Debug, Default)]
pub struct IndentationState {
    depth: usize,
}

impl IndentationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter one level deeper until the returned scope is dropped.
    pub fn push(&mut self) -> IndentScope<'_> {
        let entry = self.depth;
        self.depth += 1;
        IndentScope { state: self, entry }
    }
}

/// One pushed indentation level.
///
/// Derefs to the state so nested pushes go through the scope.
#[derive(Debug)]
pub struct IndentScope<'a> {
    state: &'a mut IndentationState,
    entry: usize,
}

impl Deref for IndentScope<'_> {
    type Target = IndentationState;

    fn deref(&self) -> &IndentationState {
        self.state
    }
}

impl DerefMut for IndentScope<'_> {
    fn deref_mut(&mut self) -> &mut IndentationState {
        self.state
    }
}

impl Drop for IndentScope<'_> {
    fn drop(&mut self) {
        let balanced = self.state.depth == self.entry + 1;
        self.state.depth = self.entry;
        if !std::thread::panicking() {
            assert!(
                balanced,
                "indentation imbalance: scope entered at depth {} left at a different depth",
                self.entry
            );
        }
    }
}
