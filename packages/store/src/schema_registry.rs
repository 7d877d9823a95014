use blocksearch_content::{ContentSchema, TypeId};

/// Content-type schema lookup owned by the host.
///
/// `None` means the type's metadata could not be loaded. Callers treat that
/// the same as a resolution miss: the item contributes nothing, nothing
/// fails.
pub trait SchemaRegistry {
    fn fields_of(&self, type_id: &TypeId) -> Option<ContentSchema>;
}
