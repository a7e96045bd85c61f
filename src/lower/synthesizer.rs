//! Reconstruction synthesis
//!
//! Turns one transformed node into a factory call:
//! 1. extract field values by matching children to the kind's slots
//! 2. find the slots whose value differs from what the factory produces
//! 3. select the smallest shape covering them
//! 4. lower the shape's fields in order, one argument per line

use smol_str::SmolStr;
use tracing::debug;

use super::error::{LowerError, LowerResult};
use super::fields::{self, FieldToken, FieldValue, ListValue};
use super::indent::IndentationState;
use super::rewriter::Rewriter;
use crate::catalog::{CatalogGap, FieldSlot, Handler, KindEntry, SlotRole, SlotSet, TokenSpec};
use crate::meta::{
    ArgValue, Argument, ListBuild, ListElement, Lowered, Reconstruction, TokenBuild,
};
use crate::syntax::{SyntaxKind, SyntaxNode};

pub(super) fn synthesize(
    rewriter: &mut Rewriter<'_>,
    node: &SyntaxNode,
    indent: &mut IndentationState,
) -> LowerResult<Lowered> {
    let kind = node.kind();
    let catalog = rewriter.catalog();
    let options = rewriter.options();
    let entry = catalog
        .entry(kind)
        .ok_or_else(|| LowerError::catalog(kind, CatalogGap::MissingEntry))?;
    if let Handler::Reject(reason) = entry.handler {
        return Err(LowerError::unsupported(kind, rewriter.locate(node), reason));
    }
    if entry.slots.len() > SlotSet::CAPACITY {
        return Err(LowerError::catalog(
            kind,
            CatalogGap::TooManySlots(entry.slots.len()),
        ));
    }

    let values = fields::extract(entry, node, options.preserves_comments()).map_err(|leftover| {
        LowerError::unsupported(
            kind,
            rewriter.locate_offset(node, leftover.offset),
            leftover.detail,
        )
    })?;

    let needed = non_default_slots(entry, &values);
    let (shape_index, shape) = entry.select_shape(needed).ok_or_else(|| {
        LowerError::catalog(
            kind,
            CatalogGap::NoCoveringShape {
                needed: needed.iter().map(|index| entry.slots[index].name).collect(),
            },
        )
    })?;
    debug!(
        "{}: shape #{} with {} argument(s)",
        entry.factory,
        shape_index,
        shape.arity()
    );

    let closing = options.line_break(indent.depth());
    let mut scope = indent.push();
    let leading = options.line_break(scope.depth());
    let mut args = Vec::with_capacity(shape.arity());

    if let Some(tag_index) = entry.tag_slot.filter(|_| shape.tagged) {
        args.push(Argument {
            slot: entry.slots[tag_index].name,
            leading: leading.clone(),
            value: tag(rewriter, entry, tag_index, &values[tag_index], node)?,
        });
    }
    for &index in &shape.slots {
        let value = lower_field(rewriter, entry, index, &values[index], node, &mut scope)?;
        args.push(Argument {
            slot: entry.slots[index].name,
            leading: leading.clone(),
            value,
        });
    }
    drop(scope);

    Ok(Lowered::Build(Reconstruction {
        kind,
        operation: entry.factory.clone(),
        args,
        closing,
    }))
}

/// Slots whose value the chosen factory has to be told about.
fn non_default_slots(entry: &KindEntry, values: &[FieldValue]) -> SlotSet {
    entry
        .slots
        .iter()
        .enumerate()
        .filter(|(index, slot)| !is_default(entry, slot, &values[*index], values))
        .map(|(index, _)| index)
        .collect()
}

fn is_default(entry: &KindEntry, slot: &FieldSlot, value: &FieldValue, values: &[FieldValue]) -> bool {
    let SlotRole::Token(spec @ TokenSpec::Fixed(kinds)) = slot.role else {
        return !value.is_present();
    };
    let synthesized = match slot.companion {
        Some(companion) => entry
            .slot_index(companion)
            .is_some_and(|index| values[index].is_present()),
        None => slot.required,
    };
    match value {
        FieldValue::Token(FieldToken { token, comments }) => {
            synthesized
                && comments.is_empty()
                && Some(token.kind()) == spec.synthesized()
                && Some(token.text()) == kinds.first().and_then(|kind| kind.fixed_text())
        }
        _ => !synthesized,
    }
}

fn tag(
    rewriter: &Rewriter<'_>,
    entry: &KindEntry,
    index: usize,
    value: &FieldValue,
    node: &SyntaxNode,
) -> LowerResult<ArgValue> {
    let table = entry.tag_table();
    let tagged = match (table, value) {
        (Some(table), FieldValue::Token(field)) => table
            .variant(field.token.kind())
            .map(|variant| (table.enum_name, variant)),
        _ => None,
    };
    let (enum_name, variant) = tagged.ok_or_else(|| {
        LowerError::unsupported(
            node.kind(),
            rewriter.locate(node),
            format!("missing `{}`", entry.slots[index].name),
        )
    })?;
    Ok(ArgValue::Tag { enum_name, variant })
}

fn lower_field(
    rewriter: &mut Rewriter<'_>,
    entry: &KindEntry,
    index: usize,
    value: &FieldValue,
    node: &SyntaxNode,
    indent: &mut IndentationState,
) -> LowerResult<ArgValue> {
    Ok(match value {
        FieldValue::Absent => ArgValue::Absent,
        FieldValue::Token(field) => ArgValue::Token(token_build(rewriter, field, node)?),
        FieldValue::Tokens(fields) => ArgValue::Tokens(
            fields
                .iter()
                .map(|field| token_build(rewriter, field, node))
                .collect::<LowerResult<_>>()?,
        ),
        FieldValue::Node(child) => ArgValue::Node(Box::new(rewriter.visit(child, indent)?)),
        FieldValue::List(list) => {
            debug_assert!(matches!(entry.slots[index].role, SlotRole::List { .. }));
            ArgValue::List(list_build(rewriter, list, indent)?)
        }
    })
}

fn list_build(
    rewriter: &mut Rewriter<'_>,
    list: &ListValue,
    indent: &mut IndentationState,
) -> LowerResult<ListBuild> {
    let options = rewriter.options();
    let closing = options.line_break(indent.depth());
    let mut scope = indent.push();
    let leading = options.line_break(scope.depth());
    let mut elements = Vec::with_capacity(list.elements.len());
    for element in &list.elements {
        elements.push(ListElement {
            leading: leading.clone(),
            value: rewriter.visit(element, &mut scope)?,
        });
    }
    Ok(ListBuild {
        elements,
        trailing_separator: list.trailing_separator,
        closing,
    })
}

fn token_build(
    rewriter: &Rewriter<'_>,
    field: &FieldToken,
    node: &SyntaxNode,
) -> LowerResult<TokenBuild> {
    let token = &field.token;
    if token.kind() == SyntaxKind::IDENT && !is_identifier(token.text()) {
        return Err(LowerError::unsupported(
            node.kind(),
            rewriter.locate_offset(node, token.text_range().start()),
            format!("`{}` is not a valid identifier", token.text()),
        ));
    }
    let text = match token.kind().fixed_text() {
        Some(fixed) if fixed == token.text() => None,
        _ => Some(SmolStr::new(token.text())),
    };
    Ok(TokenBuild {
        kind: token.kind(),
        text,
        comments: field
            .comments
            .iter()
            .map(|comment| SmolStr::new(comment.text()))
            .collect(),
    })
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|first| first == '_' || unicode_ident::is_xid_start(first))
        && chars.all(unicode_ident::is_xid_continue)
        && text != "_"
}
