//! Kind -> constructor-shape catalog
//!
//! For every node kind the catalog records:
//! - its field slots, in declaration order
//! - the constructor shapes a factory accepts (ordered subsets of the slots)
//! - the factory operation name, derived from the kind name
//! - an optional tag slot whose token selects a leading enum argument
//!
//! The standard catalog is built once per process and is read-only afterwards,
//! so concurrent lowering passes can share it.

mod table;


use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::syntax::SyntaxKind;

// ============================================================================
// Static descriptors
// ============================================================================

/// Maps a token kind to the variant of an enum argument (`BinaryOp::Add`).
#[derive(Debug)]
pub struct TagTable {
    pub enum_name: &'static str,
    pub variants: &'static [(SyntaxKind, &'static str)],
}

impl TagTable {
    pub fn variant(&self, kind: SyntaxKind) -> Option<&'static str> {
        self.variants
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, name)| *name)
    }

    pub fn kind_of(&self, variant: &str) -> Option<SyntaxKind> {
        self.variants
            .iter()
            .find(|(_, name)| *name == variant)
            .map(|(kind, _)| *kind)
    }
}

/// What a token slot accepts.
#[derive(Debug, Clone, Copy)]
pub enum TokenSpec {
    /// Keyword or punctuation; the first kind is the one factories synthesize.
    Fixed(&'static [SyntaxKind]),
    /// A token whose kind selects a tag (operators, literal tokens).
    Tagged(&'static TagTable),
    /// Text-bearing token such as an identifier.
    Text(&'static [SyntaxKind]),
}

impl TokenSpec {
    pub fn accepts(&self, kind: SyntaxKind) -> bool {
        match self {
            Self::Fixed(kinds) | Self::Text(kinds) => kinds.contains(&kind),
            Self::Tagged(table) => table.variant(kind).is_some(),
        }
    }

    /// The kind a factory produces when the slot is left out of a shape.
    pub fn synthesized(&self) -> Option<SyntaxKind> {
        match self {
            Self::Fixed(kinds) => kinds.first().copied(),
            Self::Tagged(_) | Self::Text(_) => None,
        }
    }
}

/// Categories of child nodes a node slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    Expr,
    Type,
    Stmt,
    /// Top-level members: statements plus declarations.
    Item,
    /// `case x:` and `default:` labels.
    Label,
    /// Expression or block.
    LambdaBody,
    Exact(SyntaxKind),
}

impl NodeClass {
    pub fn accepts(self, kind: SyntaxKind) -> bool {
        match self {
            Self::Expr => is_expr(kind),
            Self::Type => matches!(
                kind,
                SyntaxKind::PATH_TYPE
                    | SyntaxKind::ARRAY_TYPE
                    | SyntaxKind::NULLABLE_TYPE
                    | SyntaxKind::TUPLE_TYPE
            ),
            Self::Stmt => is_stmt(kind),
            Self::Item => {
                is_stmt(kind)
                    || matches!(
                        kind,
                        SyntaxKind::STRUCT_DEF | SyntaxKind::ENUM_DEF | SyntaxKind::USING_DIRECTIVE
                    )
            }
            Self::Label => matches!(kind, SyntaxKind::CASE_LABEL | SyntaxKind::DEFAULT_LABEL),
            Self::LambdaBody => is_expr(kind) || kind == SyntaxKind::BLOCK,
            Self::Exact(expected) => kind == expected,
        }
    }
}

fn is_expr(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::LITERAL
            | SyntaxKind::NAME_REF
            | SyntaxKind::PATH_EXPR
            | SyntaxKind::THIS_EXPR
            | SyntaxKind::PAREN_EXPR
            | SyntaxKind::TUPLE_EXPR
            | SyntaxKind::ARRAY_EXPR
            | SyntaxKind::PREFIX_EXPR
            | SyntaxKind::POSTFIX_EXPR
            | SyntaxKind::BINARY_EXPR
            | SyntaxKind::ASSIGN_EXPR
            | SyntaxKind::CONDITIONAL_EXPR
            | SyntaxKind::CAST_EXPR
            | SyntaxKind::IS_EXPR
            | SyntaxKind::AS_EXPR
            | SyntaxKind::TYPEOF_EXPR
            | SyntaxKind::AWAIT_EXPR
            | SyntaxKind::CALL_EXPR
            | SyntaxKind::MEMBER_EXPR
            | SyntaxKind::INDEX_EXPR
            | SyntaxKind::NEW_EXPR
            | SyntaxKind::LAMBDA_EXPR
    )
}

fn is_stmt(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::BLOCK
            | SyntaxKind::EMPTY_STMT
            | SyntaxKind::EXPR_STMT
            | SyntaxKind::LET_STMT
            | SyntaxKind::IF_STMT
            | SyntaxKind::WHILE_STMT
            | SyntaxKind::DO_WHILE_STMT
            | SyntaxKind::FOR_STMT
            | SyntaxKind::FOREACH_STMT
            | SyntaxKind::RETURN_STMT
            | SyntaxKind::BREAK_STMT
            | SyntaxKind::CONTINUE_STMT
            | SyntaxKind::THROW_STMT
            | SyntaxKind::YIELD_STMT
            | SyntaxKind::TRY_STMT
            | SyntaxKind::SWITCH_STMT
            | SyntaxKind::FN_DEF
    )
}

/// The logical role of a field slot.
#[derive(Debug, Clone, Copy)]
pub enum SlotRole {
    Token(TokenSpec),
    /// A run of tokens, e.g. modifiers.
    Tokens(&'static [SyntaxKind]),
    Node(NodeClass),
    List {
        element: NodeClass,
        separator: Option<SyntaxKind>,
    },
}

/// A named logical field of a node kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSlot {
    pub name: &'static str,
    pub role: SlotRole,
    pub required: bool,
    /// For fixed tokens: present exactly when the named slot is present.
    pub companion: Option<&'static str>,
}

impl FieldSlot {
    /// Fixed token slots can be synthesized by the factory.
    pub fn is_fixed_token(&self) -> bool {
        matches!(self.role, SlotRole::Token(TokenSpec::Fixed(_)))
    }

    /// Slots every shape has to carry: the factory cannot make them up.
    pub fn must_be_passed(&self) -> bool {
        self.required
            && match self.role {
                SlotRole::Token(spec) => spec.synthesized().is_none(),
                SlotRole::Node(_) => true,
                SlotRole::Tokens(_) | SlotRole::List { .. } => false,
            }
    }
}

/// A constructor shape as declared in the static table.
#[derive(Debug)]
pub struct ShapeDecl {
    /// Preference among shapes of equal arity; lower wins.
    pub rank: u8,
    pub slots: &'static [&'static str],
}

/// How the rewriter handles a transformed node of this kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Reconstruct,
    /// The kind can never be rebuilt; lowering reports the reason.
    Reject(&'static str),
}

/// Static description of one node kind.
#[derive(Debug)]
pub struct KindSpec {
    pub kind: SyntaxKind,
    pub handler: Handler,
    pub slots: &'static [FieldSlot],
    pub shapes: &'static [ShapeDecl],
    /// Slot whose tagged token selects the leading enum argument.
    pub tag: Option<&'static str>,
}

// ============================================================================
// Resolved catalog
// ============================================================================

/// Bit set of slot indices (at most [`SlotSet::CAPACITY`] slots per kind).
///
/// Indices past the capacity are never members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotSet(u64);

impl SlotSet {
    pub const EMPTY: SlotSet = SlotSet(0);
    pub const CAPACITY: usize = u64::BITS as usize;

    fn bit(index: usize) -> u64 {
        u32::try_from(index)
            .ok()
            .and_then(|index| 1u64.checked_shl(index))
            .unwrap_or(0)
    }

    pub fn insert(&mut self, index: usize) {
        self.0 |= Self::bit(index);
    }

    pub fn contains(self, index: usize) -> bool {
        self.0 & Self::bit(index) != 0
    }

    pub fn is_subset(self, other: SlotSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..Self::CAPACITY).filter(move |index| self.contains(*index))
    }
}

impl FromIterator<usize> for SlotSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = SlotSet::EMPTY;
        for index in iter {
            set.insert(index);
        }
        set
    }
}

/// One way to rebuild a node: an ordered subset of its slots.
#[derive(Debug, Clone)]
pub struct ConstructorShape {
    pub rank: u8,
    /// Slot indices in declaration order
    pub slots: Vec<usize>,
    pub set: SlotSet,
    /// Whether the shape starts with the kind's tag argument
    pub tagged: bool,
}

impl ConstructorShape {
    /// Number of arguments the factory call takes.
    pub fn arity(&self) -> usize {
        self.slots.len() + usize::from(self.tagged)
    }

    pub fn covers(&self, needed: SlotSet) -> bool {
        needed.is_subset(self.set)
    }
}

/// Resolved catalog entry for one node kind.
#[derive(Debug)]
pub struct KindEntry {
    pub kind: SyntaxKind,
    pub handler: Handler,
    pub factory: String,
    pub slots: &'static [FieldSlot],
    pub shapes: Vec<ConstructorShape>,
    pub tag_slot: Option<usize>,
}

impl KindEntry {
    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name == name)
    }

    /// Tag table of the tag slot, if the kind has one.
    pub fn tag_table(&self) -> Option<&'static TagTable> {
        match self.slots.get(self.tag_slot?)?.role {
            SlotRole::Token(TokenSpec::Tagged(table)) => Some(table),
            _ => None,
        }
    }

    /// Pick the shape with the fewest arguments covering `needed`.
    ///
    /// Equal arity is decided by the declared rank, then by declaration order.
    pub fn select_shape(&self, needed: SlotSet) -> Option<(usize, &ConstructorShape)> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape.covers(needed))
            .min_by_key(|(index, shape)| (shape.arity(), shape.rank, *index))
    }
}

/// A defect in the catalog, or a node the catalog cannot handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogGap {
    #[error("no catalog entry")]
    MissingEntry,

    #[error("oracle left the node unclassified")]
    Unclassified,

    #[error("no shape covers the fields {needed:?}")]
    NoCoveringShape { needed: Vec<&'static str> },

    #[error("shape #{shape} names unknown slot `{slot}`")]
    UnknownSlot { shape: usize, slot: &'static str },

    #[error("shape #{shape} lists slot `{slot}` out of declaration order")]
    SlotOutOfOrder { shape: usize, slot: &'static str },

    #[error("shape #{shape} omits `{slot}`, which the factory cannot synthesize")]
    RequiredSlotOmitted { shape: usize, slot: &'static str },

    #[error("shape #{shape} omits the tag slot")]
    TagSlotOmitted { shape: usize },

    #[error("shapes #{first} and #{second} share arity and rank")]
    AmbiguousRank { first: usize, second: usize },

    #[error("no shape lists every slot")]
    NoMaximalShape,

    #[error("slot `{slot}` has an invalid companion `{companion}`")]
    BadCompanion {
        slot: &'static str,
        companion: &'static str,
    },

    #[error("tag slot `{0}` is not a tagged token slot")]
    BadTagSlot(&'static str),

    #[error("too many slots ({0}, at most 64)")]
    TooManySlots(usize),

    #[error("reconstructible kind declares no shapes")]
    NoShapes,

    #[error("factory name `{0}` is used by another kind")]
    DuplicateFactory(String),
}

/// A catalog gap tied to the kind it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDefect {
    pub kind: SyntaxKind,
    pub gap: CatalogGap,
}

impl fmt::Display for CatalogDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.gap)
    }
}

/// The kind -> shapes lookup table.
#[derive(Debug)]
pub struct Catalog {
    entries: IndexMap<SyntaxKind, KindEntry>,
    by_factory: FxHashMap<String, SyntaxKind>,
    defects: Vec<CatalogDefect>,
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(table::KINDS));

impl Catalog {
    /// The catalog of the template grammar, built on first use.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Resolve static kind descriptions.
    ///
    /// Resolution never fails; problems are recorded and reported by
    /// [`Catalog::validate`].
    pub fn new(specs: &'static [KindSpec]) -> Self {
        let mut entries = IndexMap::with_capacity(specs.len());
        let mut by_factory = FxHashMap::default();
        let mut defects = Vec::new();

        for spec in specs {
            let (entry, gaps) = resolve(spec);
            defects.extend(gaps.into_iter().map(|gap| CatalogDefect {
                kind: spec.kind,
                gap,
            }));
            if by_factory.insert(entry.factory.clone(), spec.kind).is_some() {
                defects.push(CatalogDefect {
                    kind: spec.kind,
                    gap: CatalogGap::DuplicateFactory(entry.factory.clone()),
                });
            }
            entries.insert(spec.kind, entry);
        }

        Self {
            entries,
            by_factory,
            defects,
        }
    }

    pub fn entry(&self, kind: SyntaxKind) -> Option<&KindEntry> {
        self.entries.get(&kind)
    }

    /// Constructor shapes of `kind`, in declaration order.
    pub fn shapes_for(&self, kind: SyntaxKind) -> &[ConstructorShape] {
        self.entry(kind)
            .map(|entry| entry.shapes.as_slice())
            .unwrap_or(&[])
    }

    pub fn factory_operation_name(&self, kind: SyntaxKind) -> Option<&str> {
        self.entry(kind).map(|entry| entry.factory.as_str())
    }

    /// Reverse lookup used when evaluating emitted calls.
    pub fn kind_for_factory(&self, name: &str) -> Option<SyntaxKind> {
        self.by_factory.get(name).copied()
    }

    /// All entries, in table order.
    pub fn entries(&self) -> impl Iterator<Item = &KindEntry> {
        self.entries.values()
    }

    /// Every defect: resolution problems plus node kinds without an entry.
    pub fn validate(&self) -> Vec<CatalogDefect> {
        let mut defects = self.defects.clone();
        defects.extend(
            SyntaxKind::node_kinds()
                .filter(|kind| !self.entries.contains_key(kind))
                .map(|kind| CatalogDefect {
                    kind,
                    gap: CatalogGap::MissingEntry,
                }),
        );
        defects
    }
}

/// Derive the factory name from the kind name: `IF_STMT` -> `if_stmt`.
pub fn factory_name(kind: SyntaxKind) -> String {
    format!("{kind:?}").to_ascii_lowercase()
}

fn resolve(spec: &KindSpec) -> (KindEntry, Vec<CatalogGap>) {
    let mut gaps = Vec::new();
    let slots = spec.slots;
    let index_of = |name: &str| slots.iter().position(|slot| slot.name == name);

    if slots.len() > SlotSet::CAPACITY {
        gaps.push(CatalogGap::TooManySlots(slots.len()));
        let entry = KindEntry {
            kind: spec.kind,
            handler: spec.handler,
            factory: factory_name(spec.kind),
            slots,
            shapes: Vec::new(),
            tag_slot: None,
        };
        return (entry, gaps);
    }

    for slot in slots {
        if let Some(companion) = slot.companion {
            let valid = slot.is_fixed_token()
                && index_of(companion).is_some_and(|index| !slots[index].is_fixed_token());
            if !valid {
                gaps.push(CatalogGap::BadCompanion {
                    slot: slot.name,
                    companion,
                });
            }
        }
    }

    let tag_slot = spec.tag.and_then(|name| {
        let index = index_of(name);
        let tagged = index.is_some_and(|index| {
            matches!(slots[index].role, SlotRole::Token(TokenSpec::Tagged(_)))
        });
        if !tagged {
            gaps.push(CatalogGap::BadTagSlot(name));
        }
        index.filter(|_| tagged)
    });

    let mut shapes = Vec::with_capacity(spec.shapes.len());
    for (shape_index, decl) in spec.shapes.iter().enumerate() {
        let mut indices = Vec::with_capacity(decl.slots.len());
        for name in decl.slots {
            match index_of(name) {
                Some(index) => {
                    if indices.last().is_some_and(|last| *last >= index) {
                        gaps.push(CatalogGap::SlotOutOfOrder {
                            shape: shape_index,
                            slot: name,
                        });
                    }
                    indices.push(index);
                }
                None => gaps.push(CatalogGap::UnknownSlot {
                    shape: shape_index,
                    slot: name,
                }),
            }
        }
        let set: SlotSet = indices.iter().copied().collect();

        for (index, slot) in slots.iter().enumerate() {
            if slot.must_be_passed() && !set.contains(index) && Some(index) != tag_slot {
                gaps.push(CatalogGap::RequiredSlotOmitted {
                    shape: shape_index,
                    slot: slot.name,
                });
            }
        }
        if tag_slot.is_some_and(|tag| !set.contains(tag)) {
            gaps.push(CatalogGap::TagSlotOmitted { shape: shape_index });
        }

        shapes.push(ConstructorShape {
            rank: decl.rank,
            slots: indices,
            set,
            tagged: tag_slot.is_some(),
        });
    }

    for (first, a) in shapes.iter().enumerate() {
        for (second, b) in shapes.iter().enumerate().skip(first + 1) {
            if a.arity() == b.arity() && a.rank == b.rank {
                gaps.push(CatalogGap::AmbiguousRank { first, second });
            }
        }
    }

    match spec.handler {
        Handler::Reconstruct if shapes.is_empty() => gaps.push(CatalogGap::NoShapes),
        Handler::Reconstruct => {
            let all: SlotSet = (0..slots.len()).collect();
            if !shapes.iter().any(|shape| shape.covers(all)) {
                gaps.push(CatalogGap::NoMaximalShape);
            }
        }
        Handler::Reject(_) => {}
    }

    let entry = KindEntry {
        kind: spec.kind,
        handler: spec.handler,
        factory: factory_name(spec.kind),
        slots,
        shapes,
        tag_slot,
    };
    (entry, gaps)
}
