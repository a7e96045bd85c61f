//! Tree notation for fixtures
//!
//! Builds syntax trees from a compact s-expression notation, so tests and
//! tooling can describe concrete trees without a template parser.
//!
//! ```text
//! (BINARY_EXPR (NAME_REF IDENT"a") _ PLUS _ (NAME_REF IDENT"b"))
//! ```
//!
//! - `(KIND ...)` opens a node of `KIND`
//! - `KIND` alone is a token with the kind's fixed text
//! - `KIND"text"` is a token with explicit text (`\"`, `\\`, `\n` escapes)
//! - `_` is a single-space whitespace token, `/` a newline
//!
//! Trivia follows the builder convention: it is attached before the next token.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::builder::TreeBuilder;
use super::syntax_kind::SyntaxKind;
use super::SyntaxNode;

/// Errors raised while reading tree notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown syntax kind `{0}`")]
    UnknownKind(String),

    #[error("{0:?} has no fixed text; write it as {0:?}\"text\"")]
    MissingText(SyntaxKind),

    #[error("{0:?} is not a node kind")]
    NotANode(SyntaxKind),

    #[error("unexpected `{found}` at offset {offset}")]
    Unexpected { found: char, offset: usize },

    #[error("unterminated string at offset {0}")]
    UnterminatedString(usize),

    #[error("unbalanced parentheses")]
    Unbalanced,

    #[error("notation must describe exactly one root node")]
    NoSingleRoot,
}

static KINDS_BY_NAME: LazyLock<FxHashMap<String, SyntaxKind>> = LazyLock::new(|| {
    (0..SyntaxKind::__LAST as u16)
        .map(|raw| SyntaxKind::from(rowan::SyntaxKind(raw)))
        .map(|kind| (format!("{kind:?}"), kind))
        .collect()
});

/// Look up a kind by its enum name (`"IF_STMT"`).
pub fn kind_by_name(name: &str) -> Option<SyntaxKind> {
    KINDS_BY_NAME.get(name).copied()
}

/// Read tree notation into a root syntax node.
pub fn tree(notation: &str) -> Result<SyntaxNode, NotationError> {
    let mut reader = Reader {
        src: notation,
        pos: 0,
        builder: TreeBuilder::new(),
        open: 0,
        roots: 0,
    };
    reader.run()?;
    if reader.open != 0 {
        return Err(NotationError::Unbalanced);
    }
    if reader.roots != 1 {
        return Err(NotationError::NoSingleRoot);
    }
    Ok(reader.builder.finish_root())
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
    builder: TreeBuilder,
    open: usize,
    roots: usize,
}

impl Reader<'_> {
    fn run(&mut self) -> Result<(), NotationError> {
        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => self.pos += c.len_utf8(),
                '(' => {
                    self.pos += 1;
                    let kind = self.kind()?;
                    if !kind.is_node() {
                        return Err(NotationError::NotANode(kind));
                    }
                    if self.open == 0 {
                        self.roots += 1;
                        if self.roots > 1 {
                            return Err(NotationError::NoSingleRoot);
                        }
                    }
                    self.builder.start_node(kind);
                    self.open += 1;
                }
                ')' => {
                    if self.open == 0 {
                        return Err(NotationError::Unbalanced);
                    }
                    self.pos += 1;
                    self.builder.finish_node();
                    self.open -= 1;
                }
                '_' if !self.continues_word(1) => {
                    self.pos += 1;
                    self.builder.whitespace(" ");
                }
                '/' => {
                    self.pos += 1;
                    self.builder.whitespace("\n");
                }
                c if c.is_ascii_uppercase() => self.token()?,
                found => {
                    return Err(NotationError::Unexpected {
                        found,
                        offset: self.pos,
                    });
                }
            }
        }
        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn continues_word(&self, skip: usize) -> bool {
        self.src[self.pos + skip..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    fn kind(&mut self) -> Result<SyntaxKind, NotationError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.pos += 1;
        }
        let name = &self.src[start..self.pos];
        match name.chars().next() {
            Some(_) => kind_by_name(name).ok_or_else(|| NotationError::UnknownKind(name.into())),
            None => Err(match self.peek() {
                Some(found) => NotationError::Unexpected {
                    found,
                    offset: self.pos,
                },
                None => NotationError::Unbalanced,
            }),
        }
    }

    fn token(&mut self) -> Result<(), NotationError> {
        let kind = self.kind()?;
        if kind.is_node() {
            return Err(NotationError::UnknownKind(format!("{kind:?} (node kind used as token)")));
        }
        let text = if self.peek() == Some('"') {
            self.string()?
        } else {
            kind.fixed_text()
                .ok_or(NotationError::MissingText(kind))?
                .to_string()
        };
        if kind.is_trivia() {
            self.builder.trivia(kind, text);
        } else {
            self.builder.token(kind, &text);
        }
        Ok(())
    }

    fn string(&mut self) -> Result<String, NotationError> {
        let start = self.pos;
        self.pos += 1;
        let mut text = String::new();
        loop {
            let c = self
                .peek()
                .ok_or(NotationError::UnterminatedString(start))?;
            self.pos += c.len_utf8();
            match c {
                '"' => return Ok(text),
                '\\' => {
                    let escaped = self
                        .peek()
                        .ok_or(NotationError::UnterminatedString(start))?;
                    self.pos += escaped.len_utf8();
                    text.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        other => other,
                    });
                }
                c => text.push(c),
            }
        }
    }
}
