//! Meta-code evaluation
//!
//! Runs a [`Lowered`] value the way the factories would: every slot left out
//! of a call gets the factory default (synthesized keyword or punctuation,
//! or nothing), separators are inserted between list elements, and kept
//! nodes are copied. The result is a fresh syntax tree that can be compared
//! against the input of the lowering pass.

use thiserror::Error;

use super::{ArgValue, KeptChild, KeptNode, ListBuild, Lowered, Reconstruction, TokenBuild};
use crate::catalog::{Catalog, KindEntry, SlotRole, TokenSpec};
use crate::syntax::{SyntaxKind, SyntaxNode, TreeBuilder};

/// Errors raised while evaluating meta-code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unknown factory `{0}`")]
    UnknownFactory(String),

    #[error("`{operation}` has no slot `{slot}`")]
    UnknownSlot {
        operation: String,
        slot: &'static str,
    },

    #[error("`{operation}` cannot take {found} for slot `{slot}`")]
    WrongArgument {
        operation: String,
        slot: &'static str,
        found: &'static str,
    },

    #[error("`{variant}` is not a variant of {enum_name}")]
    UnknownTag {
        enum_name: &'static str,
        variant: &'static str,
    },
}

/// Evaluate `value` into a syntax tree using the factories of `catalog`.
pub fn evaluate(value: &Lowered, catalog: &Catalog) -> Result<SyntaxNode, EvalError> {
    let mut evaluator = Evaluator {
        catalog,
        builder: TreeBuilder::new(),
    };
    evaluator.lowered(value)?;
    Ok(evaluator.builder.finish_root())
}

struct Evaluator<'c> {
    catalog: &'c Catalog,
    builder: TreeBuilder,
}

impl Evaluator<'_> {
    fn lowered(&mut self, value: &Lowered) -> Result<(), EvalError> {
        match value {
            Lowered::Kept(node) => self.kept(node),
            Lowered::Build(call) => self.call(call),
        }
    }

    fn kept(&mut self, node: &KeptNode) -> Result<(), EvalError> {
        self.builder.start_node(node.kind);
        for child in &node.children {
            match child {
                KeptChild::Token { kind, text } if kind.is_trivia() => {
                    self.builder.trivia(*kind, text.clone());
                }
                KeptChild::Token { kind, text } => self.builder.token(*kind, text),
                KeptChild::Node(value) => self.lowered(value)?,
            }
        }
        self.builder.finish_node();
        Ok(())
    }

    fn call(&mut self, call: &Reconstruction) -> Result<(), EvalError> {
        let catalog = self.catalog;
        let entry = catalog
            .kind_for_factory(&call.operation)
            .and_then(|kind| catalog.entry(kind))
            .ok_or_else(|| EvalError::UnknownFactory(call.operation.clone()))?;

        let mut bound: Vec<Option<&ArgValue>> = vec![None; entry.slots.len()];
        for arg in &call.args {
            if let ArgValue::Tag { enum_name, variant } = &arg.value {
                let known = entry
                    .tag_table()
                    .is_some_and(|table| table.kind_of(variant).is_some());
                if !known {
                    return Err(EvalError::UnknownTag {
                        enum_name,
                        variant,
                    });
                }
                continue;
            }
            let index = entry
                .slot_index(arg.slot)
                .ok_or_else(|| EvalError::UnknownSlot {
                    operation: call.operation.clone(),
                    slot: arg.slot,
                })?;
            bound[index] = Some(&arg.value);
        }

        self.builder.start_node(entry.kind);
        for (index, value) in bound.iter().enumerate() {
            match value {
                Some(value) => self.argument(entry, index, value, &call.operation)?,
                None => {
                    if let Some(kind) = default_token(entry, index, &bound) {
                        self.builder.fixed(kind);
                    }
                }
            }
        }
        self.builder.finish_node();
        Ok(())
    }

    fn argument(
        &mut self,
        entry: &KindEntry,
        index: usize,
        value: &ArgValue,
        operation: &str,
    ) -> Result<(), EvalError> {
        let slot = &entry.slots[index];
        let wrong = |found| EvalError::WrongArgument {
            operation: operation.to_string(),
            slot: slot.name,
            found,
        };
        match (slot.role, value) {
            (_, ArgValue::Absent) => {}
            (SlotRole::Token(_), ArgValue::Token(token)) => self.token(token),
            (SlotRole::Tokens(_), ArgValue::Tokens(tokens)) => {
                for token in tokens {
                    self.token(token);
                }
            }
            (SlotRole::Node(_), ArgValue::Node(value)) => self.lowered(value)?,
            (SlotRole::List { separator, .. }, ArgValue::List(list)) => {
                self.list(list, separator)?;
            }
            (_, ArgValue::Tag { .. }) => return Err(wrong("a tag")),
            (_, ArgValue::Token(_)) => return Err(wrong("a token")),
            (_, ArgValue::Tokens(_)) => return Err(wrong("tokens")),
            (_, ArgValue::Node(_)) => return Err(wrong("a node")),
            (_, ArgValue::List(_)) => return Err(wrong("a list")),
        }
        Ok(())
    }

    fn token(&mut self, token: &TokenBuild) {
        for comment in &token.comments {
            if comment.starts_with("//") {
                self.builder.trivia(SyntaxKind::LINE_COMMENT, comment.clone());
                self.builder.whitespace("\n");
            } else {
                self.builder.trivia(SyntaxKind::BLOCK_COMMENT, comment.clone());
            }
        }
        self.builder.token(token.kind, token.text());
    }

    fn list(&mut self, list: &ListBuild, separator: Option<SyntaxKind>) -> Result<(), EvalError> {
        for (position, element) in list.elements.iter().enumerate() {
            if position > 0 {
                if let Some(separator) = separator {
                    self.builder.fixed(separator);
                }
            }
            self.lowered(&element.value)?;
        }
        if list.trailing_separator {
            if let Some(separator) = separator {
                self.builder.fixed(separator);
            }
        }
        Ok(())
    }
}

/// Token a factory adds for a fixed-token slot left out of the call.
fn default_token(entry: &KindEntry, index: usize, bound: &[Option<&ArgValue>]) -> Option<SyntaxKind> {
    let slot = &entry.slots[index];
    let SlotRole::Token(spec @ TokenSpec::Fixed(_)) = slot.role else {
        return None;
    };
    let synthesize = match slot.companion {
        Some(companion) => entry
            .slot_index(companion)
            .and_then(|companion| bound[companion])
            .is_some_and(is_present),
        None => slot.required,
    };
    if synthesize { spec.synthesized() } else { None }
}

fn is_present(value: &ArgValue) -> bool {
    match value {
        ArgValue::Absent => false,
        ArgValue::Tokens(tokens) => !tokens.is_empty(),
        ArgValue::List(list) => !list.elements.is_empty() || list.trailing_separator,
        ArgValue::Tag { .. } | ArgValue::Token(_) | ArgValue::Node(_) => true,
    }
}
