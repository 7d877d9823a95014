use blocksearch_content::ContentId;
use serde::{Deserialize, Serialize};

/// Kind tag of a recorded reference edge.
///
/// Only `EmbeddedContent` participates in propagation; the other kinds exist
/// because the host records every reference it knows about in the same
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    /// Owner embeds the target through a composition area or block field.
    EmbeddedContent,
    /// Owner links the target from navigation (menus, related pages).
    Navigation,
    /// Owner points at an external url.
    ExternalUrl,
}

/// A directed edge recording that `owner` references `target`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftLink {
    pub owner: ContentId,
    pub target: ContentId,
    pub kind: LinkKind,
}

/// Inverted view of the soft-link edges: target to owners.
///
/// The index is host-owned and read-mostly. It may return stale entries
/// (owners deleted since the edge was recorded) and duplicates (an owner
/// embedding the same target twice, or copy operations doubling edges);
/// order is unspecified. Consumers must tolerate all three.
pub trait ReferenceIndex {
    fn inverse_references(&self, target: &ContentId, kind: LinkKind) -> Vec<ContentId>;
}
