use crate::schema::TypeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Opaque, stable identifier for a content item.
///
/// Equality is identity-based: two ids are the same item if and only if
/// their underlying values match. Nothing structural about the item is
/// encoded here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publication status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicationStatus {
    Draft,
    Published,
}

/// One slot of a composition area.
///
/// The referenced item may be a document or a component; resolution happens
/// at traversal time through the content store. A slot holds only the
/// reference; stale references after a delete or a copy are expected and
/// resolved to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSlot {
    pub reference: ContentId,
}

impl CompositionSlot {
    pub fn new(reference: ContentId) -> Self {
        Self { reference }
    }
}

/// Runtime field payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    /// A component embedded inline on the field itself (a property block).
    Block(Component),
    /// An ordered sequence of embedding slots (a composition area).
    Composition(Vec<CompositionSlot>),
}

impl FieldValue {
    /// Rendered text representation used when a searchable field is appended
    /// to an aggregate.
    ///
    /// Block and composition values render empty: their contribution comes
    /// from traversal into the embedded items, never from the field itself.
    pub fn render_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Block(_) | FieldValue::Composition(_) => String::new(),
        }
    }
}

/// An independently indexable content item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: ContentId,
    pub name: String,
    pub type_id: TypeId,
    pub status: PublicationStatus,
    pub fields: HashMap<String, FieldValue>,
}

impl Document {
    pub fn new(id: ContentId, name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            id,
            name: name.into(),
            type_id,
            status: PublicationStatus::Draft,
            fields: HashMap::new(),
        }
    }

    pub fn with_status(mut self, status: PublicationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn is_published(&self) -> bool {
        self.status == PublicationStatus::Published
    }
}

/// An embeddable content item (a block) with no index identity of its own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ContentId,
    pub name: String,
    pub type_id: TypeId,
    pub fields: HashMap<String, FieldValue>,
}

impl Component {
    pub fn new(id: ContentId, name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            id,
            name: name.into(),
            type_id,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

/// Shared read surface over documents and components.
///
/// The aggregation walk only ever needs a type id and field lookup, so both
/// item kinds expose exactly that and nothing else.
pub trait ContentData {
    fn type_id(&self) -> &TypeId;

    fn field(&self, name: &str) -> Option<&FieldValue>;
}

impl ContentData for Document {
    fn type_id(&self) -> &TypeId {
        &self.type_id
    }

    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

impl ContentData for Component {
    fn type_id(&self) -> &TypeId {
        &self.type_id
    }

    fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}
