//! Meta-code rendering
//!
//! ```text
//! make::binary_expr(
//!     BinaryOp::Add,
//!     a,
//!     make::token(SyntaxKind::PLUS),
//!     b
//! )
//! ```
//!
//! Argument layout comes from the trivia recorded during lowering; kept
//! nodes print their own source text.

use std::fmt;

use super::{ArgValue, KeptChild, KeptNode, ListBuild, Lowered, Reconstruction, TokenBuild};
use crate::syntax::SyntaxKind;

/// Factory module used by `Display`.
pub const DEFAULT_FACTORY_MODULE: &str = "make";

impl Lowered {
    /// Render as meta-code calling factories in `factory_module`.
    pub fn render(&self, factory_module: &str) -> String {
        let mut out = String::new();
        Printer {
            module: factory_module,
        }
        .lowered(self, &mut out);
        out
    }
}

impl fmt::Display for Lowered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_FACTORY_MODULE))
    }
}

struct Printer<'a> {
    module: &'a str,
}

impl Printer<'_> {
    fn lowered(&self, value: &Lowered, out: &mut String) {
        match value {
            Lowered::Kept(node) => self.kept(node, out),
            Lowered::Build(call) => self.call(call, out),
        }
    }

    /// Spliced value: kept code loses its surrounding whitespace.
    ///
    /// A trailing line comment keeps its line break, and the next separator
    /// resumes at the `leading` indentation.
    fn spliced(&self, value: &Lowered, leading: &str, out: &mut String) {
        match value {
            Lowered::Kept(node) => {
                let mut text = String::new();
                self.kept(node, &mut text);
                out.push_str(text.trim());
                if ends_in_line_comment(node) == Some(true) {
                    out.push('\n');
                    out.push_str(leading.trim_start_matches('\n'));
                }
            }
            Lowered::Build(call) => self.call(call, out),
        }
    }

    fn kept(&self, node: &KeptNode, out: &mut String) {
        for child in &node.children {
            match child {
                KeptChild::Token { text, .. } => out.push_str(text),
                KeptChild::Node(value) => self.lowered(value, out),
            }
        }
    }

    fn call(&self, call: &Reconstruction, out: &mut String) {
        out.push_str(self.module);
        out.push_str("::");
        out.push_str(&call.operation);
        out.push('(');
        if !call.args.is_empty() {
            for (index, arg) in call.args.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&arg.leading);
                self.arg(&arg.value, &arg.leading, out);
            }
            out.push_str(&call.closing);
        }
        out.push(')');
    }

    fn arg(&self, value: &ArgValue, leading: &str, out: &mut String) {
        match value {
            ArgValue::Tag { enum_name, variant } => {
                out.push_str(enum_name);
                out.push_str("::");
                out.push_str(variant);
            }
            ArgValue::Token(token) => self.token(token, out),
            ArgValue::Tokens(tokens) => {
                out.push_str(self.module);
                out.push_str("::tokens([");
                for (index, token) in tokens.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    self.token(token, out);
                }
                out.push_str("])");
            }
            ArgValue::Node(value) => self.spliced(value, leading, out),
            ArgValue::List(list) => self.list(list, out),
            ArgValue::Absent => out.push_str("None"),
        }
    }

    fn token(&self, token: &TokenBuild, out: &mut String) {
        if !token.comments.is_empty() {
            out.push_str(self.module);
            out.push_str("::with_comments([");
            let quoted: Vec<String> = token
                .comments
                .iter()
                .map(|comment| format!("{:?}", comment.as_str()))
                .collect();
            out.push_str(&quoted.join(", "));
            out.push_str("], ");
        }
        match &token.text {
            None => {
                out.push_str(&format!("{}::token(SyntaxKind::{:?})", self.module, token.kind));
            }
            Some(text) if token.kind == SyntaxKind::IDENT => {
                out.push_str(&format!("{}::ident({:?})", self.module, text.as_str()));
            }
            Some(text) => {
                out.push_str(&format!(
                    "{}::literal(SyntaxKind::{:?}, {:?})",
                    self.module,
                    token.kind,
                    text.as_str()
                ));
            }
        }
        if !token.comments.is_empty() {
            out.push(')');
        }
    }

    fn list(&self, list: &ListBuild, out: &mut String) {
        out.push_str(self.module);
        if list.trailing_separator {
            out.push_str("::list_with_trailing_separator([");
        } else {
            out.push_str("::list([");
        }
        if !list.elements.is_empty() {
            for (index, element) in list.elements.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&element.leading);
                self.spliced(&element.value, &element.leading, out);
            }
            out.push_str(&list.closing);
        }
        out.push_str("])");
    }
}

/// Whether the last non-whitespace token of kept code is a line comment.
fn ends_in_line_comment(node: &KeptNode) -> Option<bool> {
    node.children.iter().rev().find_map(|child| match child {
        KeptChild::Token {
            kind: SyntaxKind::WHITESPACE,
            ..
        } => None,
        KeptChild::Token { kind, .. } => Some(*kind == SyntaxKind::LINE_COMMENT),
        KeptChild::Node(Lowered::Kept(inner)) => ends_in_line_comment(inner),
        KeptChild::Node(Lowered::Build(_)) => Some(false),
    })
}
