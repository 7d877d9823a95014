use blocksearch_content::Document;

/// Payload of the "document is about to be published" notification.
///
/// The incoming document is an immutable snapshot of the in-flight save.
/// A handler that wants to change it opens a mutable draft with
/// [`draft_mut`](PublishingEvent::draft_mut); the host persists
/// [`into_effective`](PublishingEvent::into_effective), so a drafted change
/// rides the caller's own save rather than triggering a second one.
#[derive(Debug)]
pub struct PublishingEvent {
    snapshot: Document,
    draft: Option<Document>,
}

impl PublishingEvent {
    pub fn new(snapshot: Document) -> Self {
        Self {
            snapshot,
            draft: None,
        }
    }

    /// Current state of the in-flight document: the draft once one has been
    /// opened, the snapshot before that.
    pub fn document(&self) -> &Document {
        self.draft.as_ref().unwrap_or(&self.snapshot)
    }

    /// Open (or continue) a mutable draft, cloning the snapshot on first
    /// use.
    pub fn draft_mut(&mut self) -> &mut Document {
        if self.draft.is_none() {
            self.draft = Some(self.snapshot.clone());
        }
        self.draft.as_mut().expect("draft just ensured")
    }

    pub fn has_draft(&self) -> bool {
        self.draft.is_some()
    }

    /// The document the host must persist: the draft if one was opened,
    /// otherwise the untouched snapshot.
    pub fn into_effective(self) -> Document {
        self.draft.unwrap_or(self.snapshot)
    }
}
