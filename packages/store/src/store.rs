use blocksearch_content::{Component, ContentId, Document};
use thiserror::Error;

/// Outcome of resolving a content id.
///
/// A closed tagged variant: callers dispatch by pattern matching, never by
/// runtime type inspection. `Unresolved` covers deleted and stale ids;
/// resolution never errors for "not found".
#[derive(Debug, Clone)]
pub enum LoadResult {
    Document(Document),
    Component(Component),
    Unresolved,
}

/// Save intent accompanying a store write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveIntent {
    /// Publish and overwrite the current version in place. Used for the
    /// synthesized republish of an affected document.
    PublishForceCurrent,
    /// Overwrite the current version without changing publication status.
    ForceCurrent,
    /// Check the item out for editing.
    CheckOut,
}

/// Access context the save runs under.
///
/// `NoAccess` asks the store to bypass the acting user's permission context;
/// content-level access restrictions on the target still apply and can
/// reject the save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    NoAccess,
    Read,
    Publish,
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("access denied saving '{name}'")]
    AccessDenied { name: String },

    #[error("store backend error: {0}")]
    Backend(String),
}

pub type SaveResult = Result<(), SaveError>;

/// Content store contract owned by the host
pub trait ContentStore {
    /// Resolve an id to its current revision.
    fn try_load(&self, id: &ContentId) -> LoadResult;

    /// Persist a new revision of a document under an explicit intent.
    fn save(&self, document: Document, intent: SaveIntent, access: AccessLevel) -> SaveResult;
}
