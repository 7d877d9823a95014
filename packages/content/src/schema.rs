use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a content type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(String);

impl TypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Declared type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    /// Inline embedded component (property block)
    Block,
    /// Ordered sequence of embedding slots (composition area)
    Composition,
}

/// Schema-declared role of a field.
///
/// Roles replace runtime marker scanning: the aggregate target is declared
/// in the type schema and resolved by a plain lookup, never discovered by
/// inspecting the document instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldRole {
    None,
    /// Receives the flattened searchable text of everything the document
    /// transitively embeds. Written only by the propagator.
    AggregatedSearchTarget,
}

/// One field definition of a content type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    pub searchable: bool,
    pub role: FieldRole,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            searchable: false,
            role: FieldRole::None,
        }
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn with_role(mut self, role: FieldRole) -> Self {
        self.role = role;
        self
    }

    pub fn is_composition(&self) -> bool {
        self.kind == FieldKind::Composition
    }
}

/// Ordered field definitions of one content type.
///
/// Field order is declaration order and is the outermost traversal order of
/// the aggregation walk, so it must be stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSchema {
    pub type_id: TypeId,
    pub fields: Vec<FieldDef>,
}

impl ContentSchema {
    pub fn new(type_id: TypeId) -> Self {
        Self {
            type_id,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// The field designated to receive the aggregated search text.
    ///
    /// Only a text-typed field can opt in; a role tag on any other kind is
    /// ignored, which makes a mistyped target behave exactly like an absent
    /// one (the document type opts out of aggregation).
    pub fn aggregate_target(&self) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|f| f.role == FieldRole::AggregatedSearchTarget && f.kind == FieldKind::Text)
    }
}
