use crate::reference_index::{LinkKind, ReferenceIndex, SoftLink};
use crate::schema_registry::SchemaRegistry;
use crate::store::{AccessLevel, ContentStore, LoadResult, SaveError, SaveIntent, SaveResult};
use blocksearch_content::{
    Component, ContentId, ContentSchema, Document, PublicationStatus, TypeId,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
enum StoredItem {
    Document(Document),
    Component(Component),
}

/// In-memory content store for tests and harnesses.
///
/// Interior mutability throughout: the engine runs single-threaded and the
/// store contract takes `&self`.
#[derive(Default)]
pub struct InMemoryContentStore {
    items: RefCell<HashMap<ContentId, StoredItem>>,
    denied: RefCell<HashSet<ContentId>>,
    failing: RefCell<HashSet<ContentId>>,
    saved: RefCell<Vec<(ContentId, SaveIntent)>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_document(&self, document: Document) {
        self.items
            .borrow_mut()
            .insert(document.id.clone(), StoredItem::Document(document));
    }

    pub fn insert_component(&self, component: Component) {
        self.items
            .borrow_mut()
            .insert(component.id.clone(), StoredItem::Component(component));
    }

    pub fn remove(&self, id: &ContentId) {
        self.items.borrow_mut().remove(id);
    }

    /// Make saves of this document fail with `AccessDenied`, simulating a
    /// content-level access restriction.
    pub fn deny_save(&self, id: ContentId) {
        self.denied.borrow_mut().insert(id);
    }

    /// Make saves of this document fail with a backend error.
    pub fn fail_save(&self, id: ContentId) {
        self.failing.borrow_mut().insert(id);
    }

    /// Saves recorded so far, in order.
    pub fn saved(&self) -> Vec<(ContentId, SaveIntent)> {
        self.saved.borrow().clone()
    }

    pub fn load_document(&self, id: &ContentId) -> Option<Document> {
        match self.items.borrow().get(id) {
            Some(StoredItem::Document(doc)) => Some(doc.clone()),
            _ => None,
        }
    }
}

impl ContentStore for InMemoryContentStore {
    fn try_load(&self, id: &ContentId) -> LoadResult {
        match self.items.borrow().get(id) {
            Some(StoredItem::Document(doc)) => LoadResult::Document(doc.clone()),
            Some(StoredItem::Component(component)) => LoadResult::Component(component.clone()),
            None => LoadResult::Unresolved,
        }
    }

    fn save(&self, mut document: Document, intent: SaveIntent, _access: AccessLevel) -> SaveResult {
        if self.denied.borrow().contains(&document.id) {
            return Err(SaveError::AccessDenied {
                name: document.name.clone(),
            });
        }
        if self.failing.borrow().contains(&document.id) {
            return Err(SaveError::Backend("storage unavailable".to_string()));
        }

        if intent == SaveIntent::PublishForceCurrent {
            document.status = PublicationStatus::Published;
        }

        self.saved
            .borrow_mut()
            .push((document.id.clone(), intent));
        self.items
            .borrow_mut()
            .insert(document.id.clone(), StoredItem::Document(document));
        Ok(())
    }
}

/// In-memory inverted soft-link index
#[derive(Default)]
pub struct InMemoryReferenceIndex {
    links: RefCell<Vec<SoftLink>>,
}

impl InMemoryReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_link(&self, owner: ContentId, target: ContentId, kind: LinkKind) {
        self.links.borrow_mut().push(SoftLink {
            owner,
            target,
            kind,
        });
    }
}

impl ReferenceIndex for InMemoryReferenceIndex {
    fn inverse_references(&self, target: &ContentId, kind: LinkKind) -> Vec<ContentId> {
        self.links
            .borrow()
            .iter()
            .filter(|link| &link.target == target && link.kind == kind)
            .map(|link| link.owner.clone())
            .collect()
    }
}

/// In-memory content-type schema registry
#[derive(Default)]
pub struct InMemorySchemaRegistry {
    schemas: RefCell<HashMap<TypeId, ContentSchema>>,
}

impl InMemorySchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, schema: ContentSchema) {
        self.schemas
            .borrow_mut()
            .insert(schema.type_id.clone(), schema);
    }
}

impl SchemaRegistry for InMemorySchemaRegistry {
    fn fields_of(&self, type_id: &TypeId) -> Option<ContentSchema> {
        self.schemas.borrow().get(type_id).cloned()
    }
}
