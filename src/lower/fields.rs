//! Field extraction
//!
//! Matches the non-trivia children of a node to the field slots of its kind,
//! in declaration order. Matching is greedy: a slot takes the next child when
//! the child fits, otherwise the slot is absent.

use rowan::TextSize;
use tracing::warn;

use crate::catalog::{KindEntry, SlotRole};
use crate::syntax::{
    NodeOrToken, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, leading_comments,
    significant_children,
};

/// A token with the comments directly in front of it.
#[derive(Debug, Clone)]
pub(crate) struct FieldToken {
    pub token: SyntaxToken,
    pub comments: Vec<SyntaxToken>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ListValue {
    pub elements: Vec<SyntaxNode>,
    pub trailing_separator: bool,
}

/// Value of one field slot.
#[derive(Debug, Clone)]
pub(crate) enum FieldValue {
    Absent,
    Token(FieldToken),
    Tokens(Vec<FieldToken>),
    Node(SyntaxNode),
    List(ListValue),
}

impl FieldValue {
    /// Present in the source: a token, a node, or a non-empty run or list.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Token(_) | Self::Node(_) => true,
            Self::Tokens(tokens) => !tokens.is_empty(),
            Self::List(list) => !list.elements.is_empty() || list.trailing_separator,
        }
    }
}

/// A child the slots of the kind could not place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Leftover {
    pub offset: TextSize,
    pub detail: String,
}

struct Child {
    element: SyntaxElement,
    comments: Vec<SyntaxToken>,
}

impl Child {
    fn token_kind(&self) -> Option<SyntaxKind> {
        self.element.as_token().map(SyntaxToken::kind)
    }

    fn node_kind(&self) -> Option<SyntaxKind> {
        self.element.as_node().map(SyntaxNode::kind)
    }
}

/// Extract the field values of `node`, one per slot of `entry`.
///
/// With `keep_comments`, comment trivia in front of a token is attached to
/// it; comments in front of a child node cannot be carried and are dropped.
pub(crate) fn extract(
    entry: &KindEntry,
    node: &SyntaxNode,
    keep_comments: bool,
) -> Result<Vec<FieldValue>, Leftover> {
    let children = significant(node, keep_comments);
    let mut cursor = 0;
    let mut values = Vec::with_capacity(entry.slots.len());

    for slot in entry.slots {
        let value = match slot.role {
            SlotRole::Token(spec) => match children.get(cursor) {
                Some(Child {
                    element: NodeOrToken::Token(token),
                    comments,
                }) if spec.accepts(token.kind()) => {
                    cursor += 1;
                    FieldValue::Token(FieldToken {
                        token: token.clone(),
                        comments: comments.clone(),
                    })
                }
                _ => FieldValue::Absent,
            },
            SlotRole::Tokens(kinds) => {
                let mut tokens = Vec::new();
                while let Some(Child {
                    element: NodeOrToken::Token(token),
                    comments,
                }) = children.get(cursor)
                {
                    if !kinds.contains(&token.kind()) {
                        break;
                    }
                    tokens.push(FieldToken {
                        token: token.clone(),
                        comments: comments.clone(),
                    });
                    cursor += 1;
                }
                FieldValue::Tokens(tokens)
            }
            SlotRole::Node(class) => match children.get(cursor) {
                Some(child @ Child {
                    element: NodeOrToken::Node(inner),
                    ..
                }) if class.accepts(inner.kind()) => {
                    cursor += 1;
                    drop_comments(child, node.kind());
                    FieldValue::Node(inner.clone())
                }
                _ => FieldValue::Absent,
            },
            SlotRole::List { element, separator } => {
                let mut list = ListValue::default();
                while let Some(
                    child @ Child {
                        element: NodeOrToken::Node(inner),
                        ..
                    },
                ) = children.get(cursor)
                {
                    if !element.accepts(inner.kind()) {
                        break;
                    }
                    drop_comments(child, node.kind());
                    list.elements.push(inner.clone());
                    cursor += 1;

                    let Some(separator) = separator else {
                        continue;
                    };
                    match children.get(cursor) {
                        Some(next) if next.token_kind() == Some(separator) => {
                            drop_comments(next, node.kind());
                            cursor += 1;
                            let more = children
                                .get(cursor)
                                .and_then(Child::node_kind)
                                .is_some_and(|kind| element.accepts(kind));
                            if !more {
                                list.trailing_separator = true;
                                break;
                            }
                        }
                        _ => break,
                    }
                }
                FieldValue::List(list)
            }
        };
        values.push(value);
    }

    match children.get(cursor) {
        None => Ok(values),
        Some(child) => Err(Leftover {
            offset: child.element.text_range().start(),
            detail: match &child.element {
                NodeOrToken::Token(token) => {
                    format!("unexpected token {:?} `{}`", token.kind(), token.text())
                }
                NodeOrToken::Node(inner) => format!("unexpected {:?}", inner.kind()),
            },
        }),
    }
}

/// Non-trivia children with the comments that precede them.
///
/// Zero-width tokens count as missing.
fn significant(node: &SyntaxNode, keep_comments: bool) -> Vec<Child> {
    let children = significant_children(node)
        .map(|element| Child {
            comments: if keep_comments {
                leading_comments(&element)
            } else {
                Vec::new()
            },
            element,
        })
        .collect();
    if keep_comments {
        let trailing = node
            .children_with_tokens()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .map_while(NodeOrToken::into_token)
            .take_while(|token| token.kind().is_trivia() || token.text().is_empty())
            .filter(|token| token.kind().is_comment())
            .count();
        if trailing > 0 {
            warn!("dropping {} trailing comment(s) of {:?}", trailing, node.kind());
        }
    }
    children
}

fn drop_comments(child: &Child, parent: SyntaxKind) {
    if !child.comments.is_empty() {
        warn!(
            "dropping {} comment(s) before {:?} in {:?}",
            child.comments.len(),
            child.element.kind(),
            parent
        );
    }
}
