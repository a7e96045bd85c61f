//! The template grammar's kind table
//!
//! One entry per node kind. Slots are listed in source order; shapes go from
//! the minimal overloads to the shape that names every slot.

use super::{FieldSlot, Handler, KindSpec, NodeClass, ShapeDecl, SlotRole, TagTable, TokenSpec};
use crate::syntax::SyntaxKind as K;

// ============================================================================
// Tag tables
// ============================================================================

pub(super) static LITERAL_KINDS: TagTable = TagTable {
    enum_name: "LiteralKind",
    variants: &[
        (K::INT_NUMBER, "Int"),
        (K::FLOAT_NUMBER, "Float"),
        (K::STRING, "String"),
        (K::CHAR, "Char"),
        (K::TRUE_KW, "True"),
        (K::FALSE_KW, "False"),
        (K::NULL_KW, "Null"),
    ],
};

pub(super) static PREFIX_OPS: TagTable = TagTable {
    enum_name: "UnaryOp",
    variants: &[
        (K::MINUS, "Neg"),
        (K::PLUS, "Plus"),
        (K::BANG, "Not"),
        (K::TILDE, "BitNot"),
        (K::PLUS_PLUS, "PreIncrement"),
        (K::MINUS_MINUS, "PreDecrement"),
    ],
};

pub(super) static POSTFIX_OPS: TagTable = TagTable {
    enum_name: "UnaryOp",
    variants: &[
        (K::PLUS_PLUS, "PostIncrement"),
        (K::MINUS_MINUS, "PostDecrement"),
    ],
};

pub(super) static BINARY_OPS: TagTable = TagTable {
    enum_name: "BinaryOp",
    variants: &[
        (K::PLUS, "Add"),
        (K::MINUS, "Sub"),
        (K::STAR, "Mul"),
        (K::SLASH, "Div"),
        (K::PERCENT, "Rem"),
        (K::AMP_AMP, "And"),
        (K::PIPE_PIPE, "Or"),
        (K::AMP, "BitAnd"),
        (K::PIPE, "BitOr"),
        (K::CARET, "BitXor"),
        (K::SHL, "Shl"),
        (K::SHR, "Shr"),
        (K::EQ_EQ, "Eq"),
        (K::BANG_EQ, "Ne"),
        (K::LT, "Lt"),
        (K::GT, "Gt"),
        (K::LT_EQ, "Le"),
        (K::GT_EQ, "Ge"),
        (K::QUESTION_QUESTION, "Coalesce"),
    ],
};

pub(super) static ASSIGN_OPS: TagTable = TagTable {
    enum_name: "AssignOp",
    variants: &[
        (K::EQ, "Assign"),
        (K::PLUS_EQ, "AddAssign"),
        (K::MINUS_EQ, "SubAssign"),
        (K::STAR_EQ, "MulAssign"),
        (K::SLASH_EQ, "DivAssign"),
        (K::PERCENT_EQ, "RemAssign"),
    ],
};

// ============================================================================
// Slot helpers
// ============================================================================

/// Required keyword or punctuation.
const fn kw(name: &'static str, kinds: &'static [K]) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::Token(TokenSpec::Fixed(kinds)),
        required: true,
        companion: None,
    }
}

/// Punctuation present exactly when `companion` is.
const fn joined(name: &'static str, kinds: &'static [K], companion: &'static str) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::Token(TokenSpec::Fixed(kinds)),
        required: false,
        companion: Some(companion),
    }
}

/// Optional keyword the factory never adds on its own.
const fn opt_kw(name: &'static str, kinds: &'static [K]) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::Token(TokenSpec::Fixed(kinds)),
        required: false,
        companion: None,
    }
}

const fn tagged(name: &'static str, table: &'static TagTable) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::Token(TokenSpec::Tagged(table)),
        required: true,
        companion: None,
    }
}

const fn ident(name: &'static str) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::Token(TokenSpec::Text(&[K::IDENT])),
        required: true,
        companion: None,
    }
}

const fn modifiers(kinds: &'static [K]) -> FieldSlot {
    FieldSlot {
        name: "modifiers",
        role: SlotRole::Tokens(kinds),
        required: false,
        companion: None,
    }
}

const fn node(name: &'static str, class: NodeClass) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::Node(class),
        required: true,
        companion: None,
    }
}

const fn opt_node(name: &'static str, class: NodeClass) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::Node(class),
        required: false,
        companion: None,
    }
}

const fn list(name: &'static str, element: NodeClass) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::List {
            element,
            separator: None,
        },
        required: false,
        companion: None,
    }
}

const fn comma_list(name: &'static str, element: NodeClass) -> FieldSlot {
    FieldSlot {
        name,
        role: SlotRole::List {
            element,
            separator: Some(K::COMMA),
        },
        required: false,
        companion: None,
    }
}

const fn shape(rank: u8, slots: &'static [&'static str]) -> ShapeDecl {
    ShapeDecl { rank, slots }
}

const fn kind(
    kind: K,
    slots: &'static [FieldSlot],
    shapes: &'static [ShapeDecl],
) -> KindSpec {
    KindSpec {
        kind,
        handler: Handler::Reconstruct,
        slots,
        shapes,
        tag: None,
    }
}

const fn tagged_kind(
    kind: K,
    tag: &'static str,
    slots: &'static [FieldSlot],
    shapes: &'static [ShapeDecl],
) -> KindSpec {
    KindSpec {
        kind,
        handler: Handler::Reconstruct,
        slots,
        shapes,
        tag: Some(tag),
    }
}

use NodeClass::{Exact, Expr, Item, LambdaBody, Label, Stmt, Type};

// ============================================================================
// Kinds
// ============================================================================

pub(super) static KINDS: &[KindSpec] = &[
    // ---------------------------------------------------------------- names
    kind(K::SOURCE_FILE, &[list("items", Item)], &[shape(0, &["items"])]),
    kind(K::NAME, &[ident("ident")], &[shape(0, &["ident"])]),
    kind(K::NAME_REF, &[ident("ident")], &[shape(0, &["ident"])]),
    kind(
        K::PATH,
        &[
            opt_node("qualifier", Exact(K::PATH)),
            joined("coloncolon", &[K::COLON_COLON], "qualifier"),
            node("segment", Exact(K::NAME_REF)),
            opt_node("generic_args", Exact(K::GENERIC_ARG_LIST)),
        ],
        &[
            shape(0, &["segment"]),
            shape(0, &["qualifier", "segment"]),
            shape(1, &["segment", "generic_args"]),
            shape(0, &["qualifier", "segment", "generic_args"]),
            shape(0, &["qualifier", "coloncolon", "segment", "generic_args"]),
        ],
    ),
    kind(
        K::GENERIC_ARG_LIST,
        &[
            kw("l_angle", &[K::LT]),
            comma_list("args", Type),
            kw("r_angle", &[K::GT]),
        ],
        &[shape(0, &["args"]), shape(0, &["l_angle", "args", "r_angle"])],
    ),
    // ---------------------------------------------------------------- types
    kind(
        K::PATH_TYPE,
        &[node("path", Exact(K::PATH))],
        &[shape(0, &["path"])],
    ),
    kind(
        K::ARRAY_TYPE,
        &[
            node("element", Type),
            kw("l_brack", &[K::L_BRACK]),
            kw("r_brack", &[K::R_BRACK]),
        ],
        &[
            shape(0, &["element"]),
            shape(0, &["element", "l_brack", "r_brack"]),
        ],
    ),
    kind(
        K::NULLABLE_TYPE,
        &[node("inner", Type), kw("question", &[K::QUESTION])],
        &[shape(0, &["inner"]), shape(0, &["inner", "question"])],
    ),
    kind(
        K::TUPLE_TYPE,
        &[
            kw("l_paren", &[K::L_PAREN]),
            comma_list("elements", Type),
            kw("r_paren", &[K::R_PAREN]),
        ],
        &[
            shape(0, &["elements"]),
            shape(0, &["l_paren", "elements", "r_paren"]),
        ],
    ),
    // ---------------------------------------------------------- expressions
    tagged_kind(
        K::LITERAL,
        "token",
        &[tagged("token", &LITERAL_KINDS)],
        &[shape(0, &["token"])],
    ),
    kind(
        K::PATH_EXPR,
        &[node("path", Exact(K::PATH))],
        &[shape(0, &["path"])],
    ),
    kind(
        K::THIS_EXPR,
        &[kw("this_kw", &[K::THIS_KW])],
        &[shape(0, &[]), shape(0, &["this_kw"])],
    ),
    kind(
        K::PAREN_EXPR,
        &[
            kw("l_paren", &[K::L_PAREN]),
            node("expr", Expr),
            kw("r_paren", &[K::R_PAREN]),
        ],
        &[shape(0, &["expr"]), shape(0, &["l_paren", "expr", "r_paren"])],
    ),
    kind(
        K::TUPLE_EXPR,
        &[
            kw("l_paren", &[K::L_PAREN]),
            comma_list("elements", Expr),
            kw("r_paren", &[K::R_PAREN]),
        ],
        &[
            shape(0, &["elements"]),
            shape(0, &["l_paren", "elements", "r_paren"]),
        ],
    ),
    kind(
        K::ARRAY_EXPR,
        &[
            kw("l_brack", &[K::L_BRACK]),
            comma_list("elements", Expr),
            kw("r_brack", &[K::R_BRACK]),
        ],
        &[
            shape(0, &["elements"]),
            shape(0, &["l_brack", "elements", "r_brack"]),
        ],
    ),
    tagged_kind(
        K::PREFIX_EXPR,
        "op",
        &[tagged("op", &PREFIX_OPS), node("operand", Expr)],
        &[shape(0, &["op", "operand"])],
    ),
    tagged_kind(
        K::POSTFIX_EXPR,
        "op",
        &[node("operand", Expr), tagged("op", &POSTFIX_OPS)],
        &[shape(0, &["operand", "op"])],
    ),
    tagged_kind(
        K::BINARY_EXPR,
        "op",
        &[node("lhs", Expr), tagged("op", &BINARY_OPS), node("rhs", Expr)],
        &[shape(0, &["lhs", "op", "rhs"])],
    ),
    tagged_kind(
        K::ASSIGN_EXPR,
        "op",
        &[
            node("target", Expr),
            tagged("op", &ASSIGN_OPS),
            node("value", Expr),
        ],
        &[shape(0, &["target", "op", "value"])],
    ),
    kind(
        K::CONDITIONAL_EXPR,
        &[
            node("condition", Expr),
            kw("question", &[K::QUESTION]),
            node("then_branch", Expr),
            kw("colon", &[K::COLON]),
            node("else_branch", Expr),
        ],
        &[
            shape(0, &["condition", "then_branch", "else_branch"]),
            shape(
                0,
                &["condition", "question", "then_branch", "colon", "else_branch"],
            ),
        ],
    ),
    kind(
        K::CAST_EXPR,
        &[
            kw("l_paren", &[K::L_PAREN]),
            node("ty", Type),
            kw("r_paren", &[K::R_PAREN]),
            node("expr", Expr),
        ],
        &[
            shape(0, &["ty", "expr"]),
            shape(0, &["l_paren", "ty", "r_paren", "expr"]),
        ],
    ),
    kind(
        K::IS_EXPR,
        &[node("expr", Expr), kw("is_kw", &[K::IS_KW]), node("ty", Type)],
        &[shape(0, &["expr", "ty"]), shape(0, &["expr", "is_kw", "ty"])],
    ),
    kind(
        K::AS_EXPR,
        &[node("expr", Expr), kw("as_kw", &[K::AS_KW]), node("ty", Type)],
        &[shape(0, &["expr", "ty"]), shape(0, &["expr", "as_kw", "ty"])],
    ),
    kind(
        K::TYPEOF_EXPR,
        &[
            kw("typeof_kw", &[K::TYPEOF_KW]),
            kw("l_paren", &[K::L_PAREN]),
            node("ty", Type),
            kw("r_paren", &[K::R_PAREN]),
        ],
        &[
            shape(0, &["ty"]),
            shape(0, &["typeof_kw", "l_paren", "ty", "r_paren"]),
        ],
    ),
    kind(
        K::AWAIT_EXPR,
        &[kw("await_kw", &[K::AWAIT_KW]), node("expr", Expr)],
        &[shape(0, &["expr"]), shape(0, &["await_kw", "expr"])],
    ),
    kind(
        K::CALL_EXPR,
        &[node("callee", Expr), node("args", Exact(K::ARG_LIST))],
        &[shape(0, &["callee", "args"])],
    ),
    kind(
        K::ARG_LIST,
        &[
            kw("l_paren", &[K::L_PAREN]),
            comma_list("args", Expr),
            kw("r_paren", &[K::R_PAREN]),
        ],
        &[shape(0, &["args"]), shape(0, &["l_paren", "args", "r_paren"])],
    ),
    kind(
        K::MEMBER_EXPR,
        &[
            node("receiver", Expr),
            kw("dot", &[K::DOT]),
            node("member", Exact(K::NAME_REF)),
        ],
        &[
            shape(0, &["receiver", "member"]),
            shape(0, &["receiver", "dot", "member"]),
        ],
    ),
    kind(
        K::INDEX_EXPR,
        &[
            node("base", Expr),
            kw("l_brack", &[K::L_BRACK]),
            node("index", Expr),
            kw("r_brack", &[K::R_BRACK]),
        ],
        &[
            shape(0, &["base", "index"]),
            shape(0, &["base", "l_brack", "index", "r_brack"]),
        ],
    ),
    kind(
        K::NEW_EXPR,
        &[
            kw("new_kw", &[K::NEW_KW]),
            node("ty", Type),
            opt_node("args", Exact(K::ARG_LIST)),
            opt_node("initializer", Exact(K::OBJECT_INITIALIZER)),
        ],
        &[
            shape(0, &["ty", "args"]),
            shape(1, &["ty", "initializer"]),
            shape(0, &["ty", "args", "initializer"]),
            shape(0, &["new_kw", "ty", "args", "initializer"]),
        ],
    ),
    kind(
        K::OBJECT_INITIALIZER,
        &[
            kw("l_brace", &[K::L_BRACE]),
            comma_list("fields", Exact(K::FIELD_INIT)),
            kw("r_brace", &[K::R_BRACE]),
        ],
        &[
            shape(0, &["fields"]),
            shape(0, &["l_brace", "fields", "r_brace"]),
        ],
    ),
    kind(
        K::FIELD_INIT,
        &[
            node("name", Exact(K::NAME_REF)),
            kw("eq", &[K::EQ]),
            node("value", Expr),
        ],
        &[shape(0, &["name", "value"]), shape(0, &["name", "eq", "value"])],
    ),
    kind(
        K::LAMBDA_EXPR,
        &[
            opt_kw("async_kw", &[K::ASYNC_KW]),
            node("params", Exact(K::PARAM_LIST)),
            kw("arrow", &[K::FAT_ARROW]),
            node("body", LambdaBody),
        ],
        &[
            shape(0, &["params", "body"]),
            shape(0, &["async_kw", "params", "body"]),
            shape(0, &["async_kw", "params", "arrow", "body"]),
        ],
    ),
    // ----------------------------------------------------------- statements
    kind(
        K::BLOCK,
        &[
            kw("l_brace", &[K::L_BRACE]),
            list("statements", Stmt),
            kw("r_brace", &[K::R_BRACE]),
        ],
        &[
            shape(0, &["statements"]),
            shape(0, &["l_brace", "statements", "r_brace"]),
        ],
    ),
    kind(
        K::EMPTY_STMT,
        &[kw("semicolon", &[K::SEMICOLON])],
        &[shape(0, &[]), shape(0, &["semicolon"])],
    ),
    kind(
        K::EXPR_STMT,
        &[node("expr", Expr), kw("semicolon", &[K::SEMICOLON])],
        &[shape(0, &["expr"]), shape(0, &["expr", "semicolon"])],
    ),
    kind(
        K::LET_STMT,
        &[
            kw("keyword", &[K::VAR_KW, K::CONST_KW]),
            node("name", Exact(K::NAME)),
            joined("colon", &[K::COLON], "ty"),
            opt_node("ty", Type),
            joined("eq", &[K::EQ], "initializer"),
            opt_node("initializer", Expr),
            kw("semicolon", &[K::SEMICOLON]),
        ],
        &[
            shape(0, &["name", "initializer"]),
            shape(1, &["name", "ty"]),
            shape(0, &["name", "ty", "initializer"]),
            shape(0, &["keyword", "name", "ty", "initializer"]),
            shape(
                0,
                &["keyword", "name", "colon", "ty", "eq", "initializer", "semicolon"],
            ),
        ],
    ),
    kind(
        K::IF_STMT,
        &[
            kw("if_kw", &[K::IF_KW]),
            kw("l_paren", &[K::L_PAREN]),
            node("condition", Expr),
            kw("r_paren", &[K::R_PAREN]),
            node("then_branch", Stmt),
            opt_node("else_clause", Exact(K::ELSE_CLAUSE)),
        ],
        &[
            shape(0, &["condition", "then_branch"]),
            shape(0, &["condition", "then_branch", "else_clause"]),
            shape(
                0,
                &["if_kw", "l_paren", "condition", "r_paren", "then_branch", "else_clause"],
            ),
        ],
    ),
    kind(
        K::ELSE_CLAUSE,
        &[kw("else_kw", &[K::ELSE_KW]), node("body", Stmt)],
        &[shape(0, &["body"]), shape(0, &["else_kw", "body"])],
    ),
    kind(
        K::WHILE_STMT,
        &[
            kw("while_kw", &[K::WHILE_KW]),
            kw("l_paren", &[K::L_PAREN]),
            node("condition", Expr),
            kw("r_paren", &[K::R_PAREN]),
            node("body", Stmt),
        ],
        &[
            shape(0, &["condition", "body"]),
            shape(0, &["while_kw", "l_paren", "condition", "r_paren", "body"]),
        ],
    ),
    kind(
        K::DO_WHILE_STMT,
        &[
            kw("do_kw", &[K::DO_KW]),
            node("body", Stmt),
            kw("while_kw", &[K::WHILE_KW]),
            kw("l_paren", &[K::L_PAREN]),
            node("condition", Expr),
            kw("r_paren", &[K::R_PAREN]),
            kw("semicolon", &[K::SEMICOLON]),
        ],
        &[
            shape(0, &["body", "condition"]),
            shape(
                0,
                &["do_kw", "body", "while_kw", "l_paren", "condition", "r_paren", "semicolon"],
            ),
        ],
    ),
    kind(
        K::FOR_STMT,
        &[
            kw("for_kw", &[K::FOR_KW]),
            kw("l_paren", &[K::L_PAREN]),
            opt_node("initializer", Expr),
            kw("first_semicolon", &[K::SEMICOLON]),
            opt_node("condition", Expr),
            kw("second_semicolon", &[K::SEMICOLON]),
            opt_node("step", Expr),
            kw("r_paren", &[K::R_PAREN]),
            node("body", Stmt),
        ],
        &[
            shape(0, &["condition", "body"]),
            shape(0, &["initializer", "condition", "step", "body"]),
            shape(
                0,
                &[
                    "for_kw",
                    "l_paren",
                    "initializer",
                    "first_semicolon",
                    "condition",
                    "second_semicolon",
                    "step",
                    "r_paren",
                    "body",
                ],
            ),
        ],
    ),
    kind(
        K::FOREACH_STMT,
        &[
            kw("foreach_kw", &[K::FOREACH_KW]),
            kw("l_paren", &[K::L_PAREN]),
            kw("var_kw", &[K::VAR_KW]),
            node("binding", Exact(K::NAME)),
            kw("in_kw", &[K::IN_KW]),
            node("iterable", Expr),
            kw("r_paren", &[K::R_PAREN]),
            node("body", Stmt),
        ],
        &[
            shape(0, &["binding", "iterable", "body"]),
            shape(
                0,
                &[
                    "foreach_kw",
                    "l_paren",
                    "var_kw",
                    "binding",
                    "in_kw",
                    "iterable",
                    "r_paren",
                    "body",
                ],
            ),
        ],
    ),
    kind(
        K::RETURN_STMT,
        &[
            kw("return_kw", &[K::RETURN_KW]),
            opt_node("value", Expr),
            kw("semicolon", &[K::SEMICOLON]),
        ],
        &[
            shape(0, &[]),
            shape(0, &["value"]),
            shape(0, &["return_kw", "value", "semicolon"]),
        ],
    ),
    kind(
        K::BREAK_STMT,
        &[kw("break_kw", &[K::BREAK_KW]), kw("semicolon", &[K::SEMICOLON])],
        &[shape(0, &[]), shape(0, &["break_kw", "semicolon"])],
    ),
    kind(
        K::CONTINUE_STMT,
        &[
            kw("continue_kw", &[K::CONTINUE_KW]),
            kw("semicolon", &[K::SEMICOLON]),
        ],
        &[shape(0, &[]), shape(0, &["continue_kw", "semicolon"])],
    ),
    kind(
        K::THROW_STMT,
        &[
            kw("throw_kw", &[K::THROW_KW]),
            opt_node("value", Expr),
            kw("semicolon", &[K::SEMICOLON]),
        ],
        &[
            shape(0, &[]),
            shape(0, &["value"]),
            shape(0, &["throw_kw", "value", "semicolon"]),
        ],
    ),
    kind(
        K::YIELD_STMT,
        &[
            kw("yield_kw", &[K::YIELD_KW]),
            node("value", Expr),
            kw("semicolon", &[K::SEMICOLON]),
        ],
        &[
            shape(0, &["value"]),
            shape(0, &["yield_kw", "value", "semicolon"]),
        ],
    ),
    kind(
        K::TRY_STMT,
        &[
            kw("try_kw", &[K::TRY_KW]),
            node("body", Exact(K::BLOCK)),
            list("catches", Exact(K::CATCH_CLAUSE)),
            opt_node("finally_clause", Exact(K::FINALLY_CLAUSE)),
        ],
        &[
            shape(0, &["body", "catches"]),
            shape(1, &["body", "finally_clause"]),
            shape(0, &["body", "catches", "finally_clause"]),
            shape(0, &["try_kw", "body", "catches", "finally_clause"]),
        ],
    ),
    kind(
        K::CATCH_CLAUSE,
        &[
            kw("catch_kw", &[K::CATCH_KW]),
            opt_node("declaration", Exact(K::CATCH_DECL)),
            node("body", Exact(K::BLOCK)),
        ],
        &[
            shape(0, &["body"]),
            shape(0, &["declaration", "body"]),
            shape(0, &["catch_kw", "declaration", "body"]),
        ],
    ),
    kind(
        K::CATCH_DECL,
        &[
            kw("l_paren", &[K::L_PAREN]),
            node("ty", Type),
            opt_node("binding", Exact(K::NAME)),
            kw("r_paren", &[K::R_PAREN]),
        ],
        &[
            shape(0, &["ty"]),
            shape(0, &["ty", "binding"]),
            shape(0, &["l_paren", "ty", "binding", "r_paren"]),
        ],
    ),
    kind(
        K::FINALLY_CLAUSE,
        &[
            kw("finally_kw", &[K::FINALLY_KW]),
            node("body", Exact(K::BLOCK)),
        ],
        &[shape(0, &["body"]), shape(0, &["finally_kw", "body"])],
    ),
    kind(
        K::SWITCH_STMT,
        &[
            kw("switch_kw", &[K::SWITCH_KW]),
            kw("l_paren", &[K::L_PAREN]),
            node("scrutinee", Expr),
            kw("r_paren", &[K::R_PAREN]),
            kw("l_brace", &[K::L_BRACE]),
            list("sections", Exact(K::SWITCH_SECTION)),
            kw("r_brace", &[K::R_BRACE]),
        ],
        &[
            shape(0, &["scrutinee", "sections"]),
            shape(
                0,
                &[
                    "switch_kw",
                    "l_paren",
                    "scrutinee",
                    "r_paren",
                    "l_brace",
                    "sections",
                    "r_brace",
                ],
            ),
        ],
    ),
    kind(
        K::SWITCH_SECTION,
        &[list("labels", Label), list("statements", Stmt)],
        &[shape(0, &["labels", "statements"])],
    ),
    kind(
        K::CASE_LABEL,
        &[
            kw("case_kw", &[K::CASE_KW]),
            node("value", Expr),
            kw("colon", &[K::COLON]),
        ],
        &[shape(0, &["value"]), shape(0, &["case_kw", "value", "colon"])],
    ),
    kind(
        K::DEFAULT_LABEL,
        &[kw("default_kw", &[K::DEFAULT_KW]), kw("colon", &[K::COLON])],
        &[shape(0, &[]), shape(0, &["default_kw", "colon"])],
    ),
    // ---------------------------------------------------------------- items
    kind(
        K::FN_DEF,
        &[
            modifiers(&[K::PUB_KW, K::STATIC_KW, K::ASYNC_KW]),
            kw("fn_kw", &[K::FN_KW]),
            node("name", Exact(K::NAME)),
            opt_node("generic_params", Exact(K::GENERIC_PARAM_LIST)),
            node("params", Exact(K::PARAM_LIST)),
            opt_node("ret_type", Exact(K::RET_TYPE)),
            opt_node("body", Exact(K::BLOCK)),
            opt_kw("semicolon", &[K::SEMICOLON]),
        ],
        &[
            shape(0, &["name", "params", "body"]),
            shape(0, &["name", "params", "ret_type", "body"]),
            shape(1, &["modifiers", "name", "params", "body"]),
            shape(0, &["modifiers", "name", "params", "ret_type", "body"]),
            shape(
                0,
                &["modifiers", "name", "generic_params", "params", "ret_type", "body"],
            ),
            shape(
                0,
                &[
                    "modifiers",
                    "fn_kw",
                    "name",
                    "generic_params",
                    "params",
                    "ret_type",
                    "body",
                    "semicolon",
                ],
            ),
        ],
    ),
    kind(
        K::GENERIC_PARAM_LIST,
        &[
            kw("l_angle", &[K::LT]),
            comma_list("params", Exact(K::GENERIC_PARAM)),
            kw("r_angle", &[K::GT]),
        ],
        &[
            shape(0, &["params"]),
            shape(0, &["l_angle", "params", "r_angle"]),
        ],
    ),
    kind(
        K::GENERIC_PARAM,
        &[node("name", Exact(K::NAME))],
        &[shape(0, &["name"])],
    ),
    kind(
        K::PARAM_LIST,
        &[
            kw("l_paren", &[K::L_PAREN]),
            comma_list("params", Exact(K::PARAM)),
            kw("r_paren", &[K::R_PAREN]),
        ],
        &[
            shape(0, &["params"]),
            shape(0, &["l_paren", "params", "r_paren"]),
        ],
    ),
    kind(
        K::PARAM,
        &[
            node("name", Exact(K::NAME)),
            joined("colon", &[K::COLON], "ty"),
            opt_node("ty", Type),
            joined("eq", &[K::EQ], "default"),
            opt_node("default", Expr),
        ],
        &[
            shape(0, &["name"]),
            shape(0, &["name", "ty"]),
            shape(1, &["name", "default"]),
            shape(0, &["name", "ty", "default"]),
            shape(0, &["name", "colon", "ty", "eq", "default"]),
        ],
    ),
    kind(
        K::RET_TYPE,
        &[kw("arrow", &[K::THIN_ARROW]), node("ty", Type)],
        &[shape(0, &["ty"]), shape(0, &["arrow", "ty"])],
    ),
    kind(
        K::STRUCT_DEF,
        &[
            modifiers(&[K::PUB_KW, K::STATIC_KW]),
            kw("struct_kw", &[K::STRUCT_KW]),
            node("name", Exact(K::NAME)),
            opt_node("generic_params", Exact(K::GENERIC_PARAM_LIST)),
            node("fields", Exact(K::FIELD_LIST)),
        ],
        &[
            shape(0, &["name", "fields"]),
            shape(0, &["modifiers", "name", "fields"]),
            shape(1, &["name", "generic_params", "fields"]),
            shape(0, &["modifiers", "name", "generic_params", "fields"]),
            shape(
                0,
                &["modifiers", "struct_kw", "name", "generic_params", "fields"],
            ),
        ],
    ),
    kind(
        K::FIELD_LIST,
        &[
            kw("l_brace", &[K::L_BRACE]),
            list("fields", Exact(K::FIELD_DEF)),
            kw("r_brace", &[K::R_BRACE]),
        ],
        &[
            shape(0, &["fields"]),
            shape(0, &["l_brace", "fields", "r_brace"]),
        ],
    ),
    kind(
        K::FIELD_DEF,
        &[
            modifiers(&[K::PUB_KW, K::STATIC_KW]),
            node("name", Exact(K::NAME)),
            kw("colon", &[K::COLON]),
            node("ty", Type),
            kw("semicolon", &[K::SEMICOLON]),
        ],
        &[
            shape(0, &["name", "ty"]),
            shape(0, &["modifiers", "name", "ty"]),
            shape(0, &["modifiers", "name", "colon", "ty", "semicolon"]),
        ],
    ),
    kind(
        K::ENUM_DEF,
        &[
            modifiers(&[K::PUB_KW]),
            kw("enum_kw", &[K::ENUM_KW]),
            node("name", Exact(K::NAME)),
            node("variants", Exact(K::VARIANT_LIST)),
        ],
        &[
            shape(0, &["name", "variants"]),
            shape(0, &["modifiers", "name", "variants"]),
            shape(0, &["modifiers", "enum_kw", "name", "variants"]),
        ],
    ),
    kind(
        K::VARIANT_LIST,
        &[
            kw("l_brace", &[K::L_BRACE]),
            comma_list("variants", Exact(K::VARIANT)),
            kw("r_brace", &[K::R_BRACE]),
        ],
        &[
            shape(0, &["variants"]),
            shape(0, &["l_brace", "variants", "r_brace"]),
        ],
    ),
    kind(
        K::VARIANT,
        &[
            node("name", Exact(K::NAME)),
            joined("eq", &[K::EQ], "value"),
            opt_node("value", Expr),
        ],
        &[
            shape(0, &["name"]),
            shape(0, &["name", "value"]),
            shape(0, &["name", "eq", "value"]),
        ],
    ),
    kind(
        K::USING_DIRECTIVE,
        &[
            kw("using_kw", &[K::USING_KW]),
            node("path", Exact(K::PATH)),
            kw("semicolon", &[K::SEMICOLON]),
        ],
        &[
            shape(0, &["path"]),
            shape(0, &["using_kw", "path", "semicolon"]),
        ],
    ),
    // -------------------------------------------------------------- special
    KindSpec {
        kind: K::ERROR,
        handler: Handler::Reject("error nodes from a failed parse cannot be rebuilt"),
        slots: &[],
        shapes: &[],
        tag: None,
    },
];
