//! Meta-code produced by lowering
//!
//! A lowering pass turns a syntax tree into a [`Lowered`] value:
//! - [`KeptNode`] - compile-time code, emitted as its own source text
//! - [`Reconstruction`] - a factory call that rebuilds a run-time node
//!
//! [`render`] prints the value as meta-code, [`eval`] runs it the way the
//! factories would and rebuilds a syntax tree.

pub mod eval;
mod render;

use smol_str::SmolStr;

use crate::syntax::SyntaxKind;

pub use eval::{EvalError, evaluate};
pub use render::DEFAULT_FACTORY_MODULE;

/// Result of visiting one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lowered {
    Kept(KeptNode),
    Build(Reconstruction),
}

impl Lowered {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Self::Kept(node) => node.kind,
            Self::Build(call) => call.kind,
        }
    }

    pub fn as_build(&self) -> Option<&Reconstruction> {
        match self {
            Self::Build(call) => Some(call),
            Self::Kept(_) => None,
        }
    }

    pub fn as_kept(&self) -> Option<&KeptNode> {
        match self {
            Self::Kept(node) => Some(node),
            Self::Build(_) => None,
        }
    }
}

/// A compile-time node whose children were lowered in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeptNode {
    pub kind: SyntaxKind,
    pub children: Vec<KeptChild>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeptChild {
    /// Token copied from source, trivia included.
    Token { kind: SyntaxKind, text: SmolStr },
    Node(Lowered),
}

/// A factory call rebuilding one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub kind: SyntaxKind,
    /// Factory operation name, e.g. `if_stmt`
    pub operation: String,
    /// Arguments in shape order
    pub args: Vec<Argument>,
    /// Trivia before the closing parenthesis
    pub closing: String,
}

impl Reconstruction {
    /// Argument bound to the named slot.
    pub fn arg(&self, slot: &str) -> Option<&ArgValue> {
        self.args
            .iter()
            .find(|arg| arg.slot == slot)
            .map(|arg| &arg.value)
    }

    pub fn slot_names(&self) -> Vec<&'static str> {
        self.args.iter().map(|arg| arg.slot).collect()
    }
}

/// One argument of a factory call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Field slot the argument fills; the tag argument uses the tag slot's name
    pub slot: &'static str,
    /// Newline plus indentation emitted before the argument
    pub leading: String,
    pub value: ArgValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Discriminant such as `BinaryOp::Add`.
    Tag {
        enum_name: &'static str,
        variant: &'static str,
    },
    Token(TokenBuild),
    Tokens(Vec<TokenBuild>),
    Node(Box<Lowered>),
    List(ListBuild),
    /// Explicitly absent optional field.
    Absent,
}

/// Construction of a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBuild {
    pub kind: SyntaxKind,
    /// `None` when the token carries its kind's fixed text
    pub text: Option<SmolStr>,
    /// Comments preserved in front of the token
    pub comments: Vec<SmolStr>,
}

impl TokenBuild {
    pub fn text(&self) -> &str {
        match &self.text {
            Some(text) => text,
            None => self.kind.fixed_text().unwrap_or(""),
        }
    }
}

/// Construction of a node list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBuild {
    pub elements: Vec<ListElement>,
    pub trailing_separator: bool,
    /// Trivia before the closing bracket
    pub closing: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListElement {
    pub leading: String,
    pub value: Lowered,
}
