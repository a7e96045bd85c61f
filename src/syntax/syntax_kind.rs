//! Syntax kinds for the template CST
//!
//! This enum defines all possible node and token kinds of the template grammar.
//! Token kinds come first, node kinds follow `SOURCE_FILE`.

/// All syntax kinds (tokens and nodes) of the template grammar
///
/// Tokens are leaves (identifiers, literals, keywords, punctuation).
/// Nodes are composite (expressions, statements, items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,        // foo
    INT_NUMBER,   // 42
    FLOAT_NUMBER, // 3.14
    STRING,       // "hello"
    CHAR,         // 'c'

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,           // (
    R_PAREN,           // )
    L_BRACE,           // {
    R_BRACE,           // }
    L_BRACK,           // [
    R_BRACK,           // ]
    SEMICOLON,         // ;
    COMMA,             // ,
    DOT,               // .
    COLON,             // :
    COLON_COLON,       // ::
    QUESTION,          // ?
    QUESTION_QUESTION, // ??
    FAT_ARROW,         // =>
    THIN_ARROW,        // ->
    EQ,                // =
    PLUS_EQ,           // +=
    MINUS_EQ,          // -=
    STAR_EQ,           // *=
    SLASH_EQ,          // /=
    PERCENT_EQ,        // %=
    PLUS,              // +
    MINUS,             // -
    STAR,              // *
    SLASH,             // /
    PERCENT,           // %
    BANG,              // !
    TILDE,             // ~
    AMP,               // &
    PIPE,              // |
    CARET,             // ^
    AMP_AMP,           // &&
    PIPE_PIPE,         // ||
    EQ_EQ,             // ==
    BANG_EQ,           // !=
    LT,                // <
    GT,                // >
    LT_EQ,             // <=
    GT_EQ,             // >=
    SHL,               // <<
    SHR,               // >>
    PLUS_PLUS,         // ++
    MINUS_MINUS,       // --

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    AS_KW,
    ASYNC_KW,
    AWAIT_KW,
    BREAK_KW,
    CASE_KW,
    CATCH_KW,
    CONST_KW,
    CONTINUE_KW,
    DEFAULT_KW,
    DO_KW,
    ELSE_KW,
    ENUM_KW,
    FALSE_KW,
    FINALLY_KW,
    FN_KW,
    FOR_KW,
    FOREACH_KW,
    IF_KW,
    IN_KW,
    IS_KW,
    NEW_KW,
    NULL_KW,
    PUB_KW,
    RETURN_KW,
    STATIC_KW,
    STRUCT_KW,
    SWITCH_KW,
    THIS_KW,
    THROW_KW,
    TRUE_KW,
    TRY_KW,
    TYPEOF_KW,
    USING_KW,
    VAR_KW,
    WHILE_KW,
    YIELD_KW,

    // =========================================================================
    // NODES - File and names
    // =========================================================================
    SOURCE_FILE,
    NAME,
    NAME_REF,
    PATH,
    GENERIC_ARG_LIST,

    // =========================================================================
    // NODES - Types
    // =========================================================================
    PATH_TYPE,
    ARRAY_TYPE,
    NULLABLE_TYPE,
    TUPLE_TYPE,

    // =========================================================================
    // NODES - Expressions
    // =========================================================================
    LITERAL,
    PATH_EXPR,
    THIS_EXPR,
    PAREN_EXPR,
    TUPLE_EXPR,
    ARRAY_EXPR,
    PREFIX_EXPR,
    POSTFIX_EXPR,
    BINARY_EXPR,
    ASSIGN_EXPR,
    CONDITIONAL_EXPR,
    CAST_EXPR,
    IS_EXPR,
    AS_EXPR,
    TYPEOF_EXPR,
    AWAIT_EXPR,
    CALL_EXPR,
    ARG_LIST,
    MEMBER_EXPR,
    INDEX_EXPR,
    NEW_EXPR,
    OBJECT_INITIALIZER,
    FIELD_INIT,
    LAMBDA_EXPR,

    // =========================================================================
    // NODES - Statements
    // =========================================================================
    BLOCK,
    EMPTY_STMT,
    EXPR_STMT,
    LET_STMT,
    IF_STMT,
    ELSE_CLAUSE,
    WHILE_STMT,
    DO_WHILE_STMT,
    FOR_STMT,
    FOREACH_STMT,
    RETURN_STMT,
    BREAK_STMT,
    CONTINUE_STMT,
    THROW_STMT,
    YIELD_STMT,
    TRY_STMT,
    CATCH_CLAUSE,
    CATCH_DECL,
    FINALLY_CLAUSE,
    SWITCH_STMT,
    SWITCH_SECTION,
    CASE_LABEL,
    DEFAULT_LABEL,

    // =========================================================================
    // NODES - Items
    // =========================================================================
    FN_DEF,
    GENERIC_PARAM_LIST,
    GENERIC_PARAM,
    PARAM_LIST,
    PARAM,
    RET_TYPE,
    STRUCT_DEF,
    FIELD_LIST,
    FIELD_DEF,
    ENUM_DEF,
    VARIANT_LIST,
    VARIANT,
    USING_DIRECTIVE,

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a comment token
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::AS_KW as u16) && (self as u16) <= (Self::YIELD_KW as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_PAREN as u16) && (self as u16) <= (Self::MINUS_MINUS as u16)
    }

    /// Check if this is a literal
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IDENT | Self::INT_NUMBER | Self::FLOAT_NUMBER | Self::STRING | Self::CHAR
        )
    }

    /// Check if this is a token kind (anything before `SOURCE_FILE`)
    pub fn is_token(self) -> bool {
        (self as u16) < (Self::SOURCE_FILE as u16)
    }

    /// Check if this is a node kind
    pub fn is_node(self) -> bool {
        !self.is_token() && self != Self::__LAST
    }

    /// Every node kind, in declaration order.
    pub fn node_kinds() -> impl Iterator<Item = SyntaxKind> {
        (Self::SOURCE_FILE as u16..Self::__LAST as u16).map(Self::from_raw)
    }

    fn from_raw(raw: u16) -> SyntaxKind {
        assert!(raw < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw) }
    }

    /// The text every token of this kind carries, if it is fixed.
    ///
    /// Keywords and punctuation have fixed text; identifiers, literals and
    /// trivia carry their own text.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            Self::L_PAREN => "(",
            Self::R_PAREN => ")",
            Self::L_BRACE => "{",
            Self::R_BRACE => "}",
            Self::L_BRACK => "[",
            Self::R_BRACK => "]",
            Self::SEMICOLON => ";",
            Self::COMMA => ",",
            Self::DOT => ".",
            Self::COLON => ":",
            Self::COLON_COLON => "::",
            Self::QUESTION => "?",
            Self::QUESTION_QUESTION => "??",
            Self::FAT_ARROW => "=>",
            Self::THIN_ARROW => "->",
            Self::EQ => "=",
            Self::PLUS_EQ => "+=",
            Self::MINUS_EQ => "-=",
            Self::STAR_EQ => "*=",
            Self::SLASH_EQ => "/=",
            Self::PERCENT_EQ => "%=",
            Self::PLUS => "+",
            Self::MINUS => "-",
            Self::STAR => "*",
            Self::SLASH => "/",
            Self::PERCENT => "%",
            Self::BANG => "!",
            Self::TILDE => "~",
            Self::AMP => "&",
            Self::PIPE => "|",
            Self::CARET => "^",
            Self::AMP_AMP => "&&",
            Self::PIPE_PIPE => "||",
            Self::EQ_EQ => "==",
            Self::BANG_EQ => "!=",
            Self::LT => "<",
            Self::GT => ">",
            Self::LT_EQ => "<=",
            Self::GT_EQ => ">=",
            Self::SHL => "<<",
            Self::SHR => ">>",
            Self::PLUS_PLUS => "++",
            Self::MINUS_MINUS => "--",
            Self::AS_KW => "as",
            Self::ASYNC_KW => "async",
            Self::AWAIT_KW => "await",
            Self::BREAK_KW => "break",
            Self::CASE_KW => "case",
            Self::CATCH_KW => "catch",
            Self::CONST_KW => "const",
            Self::CONTINUE_KW => "continue",
            Self::DEFAULT_KW => "default",
            Self::DO_KW => "do",
            Self::ELSE_KW => "else",
            Self::ENUM_KW => "enum",
            Self::FALSE_KW => "false",
            Self::FINALLY_KW => "finally",
            Self::FN_KW => "fn",
            Self::FOR_KW => "for",
            Self::FOREACH_KW => "foreach",
            Self::IF_KW => "if",
            Self::IN_KW => "in",
            Self::IS_KW => "is",
            Self::NEW_KW => "new",
            Self::NULL_KW => "null",
            Self::PUB_KW => "pub",
            Self::RETURN_KW => "return",
            Self::STATIC_KW => "static",
            Self::STRUCT_KW => "struct",
            Self::SWITCH_KW => "switch",
            Self::THIS_KW => "this",
            Self::THROW_KW => "throw",
            Self::TRUE_KW => "true",
            Self::TRY_KW => "try",
            Self::TYPEOF_KW => "typeof",
            Self::USING_KW => "using",
            Self::VAR_KW => "var",
            Self::WHILE_KW => "while",
            Self::YIELD_KW => "yield",
            _ => return None,
        };
        Some(text)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        SyntaxKind::from_raw(raw.0)
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateLanguage {}

impl rowan::Language for TemplateLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<TemplateLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<TemplateLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<TemplateLanguage>;
