//! Oracles used across tests.

use std::sync::Mutex;

use quasi::lower::{BindingTimeOracle, TransformationKind};
use quasi::syntax::{SyntaxKind, SyntaxNode};

/// Keeps the listed kinds and transforms everything else.
pub struct KeepKinds(pub &'static [SyntaxKind]);

impl BindingTimeOracle for KeepKinds {
    fn classify(&self, node: &SyntaxNode) -> TransformationKind {
        if self.0.contains(&node.kind()) {
            TransformationKind::Keep
        } else {
            TransformationKind::Transform
        }
    }
}

/// Records every node it is asked about, transforming all of them.
#[derive(Default)]
pub struct Recording {
    pub seen: Mutex<Vec<SyntaxNode>>,
}

impl Recording {
    pub fn seen_texts(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|node| node.text().to_string())
            .collect()
    }
}

impl BindingTimeOracle for Recording {
    fn classify(&self, node: &SyntaxNode) -> TransformationKind {
        self.seen.lock().unwrap().push(node.clone());
        TransformationKind::Transform
    }
}
