use crate::cycle::PropagationCycle;
use crate::error::{PropagationError, PropagationResult};
use crate::event::PublishingEvent;
use blocksearch_aggregator::Aggregator;
use blocksearch_content::{ContentId, FieldValue};
use blocksearch_store::{
    AccessLevel, ContentStore, LinkKind, LoadResult, ReferenceIndex, SaveError, SaveIntent,
    SchemaRegistry,
};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Orchestrates propagation from a changed component to the documents that
/// embed it.
///
/// Stateless: every method takes `&self`, and all per-cycle mutable state
/// lives in the [`PropagationCycle`] the host threads through
/// [`on_document_publishing`](Propagator::on_document_publishing). That is
/// what makes the re-entrant call path (propagator save → host publish
/// pipeline → propagator handler) borrow-clean.
pub struct Propagator {
    index: Rc<dyn ReferenceIndex>,
    store: Rc<dyn ContentStore>,
    schemas: Rc<dyn SchemaRegistry>,
    aggregator: Aggregator,
}

impl Propagator {
    pub fn new(
        index: Rc<dyn ReferenceIndex>,
        store: Rc<dyn ContentStore>,
        schemas: Rc<dyn SchemaRegistry>,
    ) -> Self {
        let aggregator = Aggregator::new(store.clone(), schemas.clone());
        Self {
            index,
            store,
            schemas,
            aggregator,
        }
    }

    /// A component was published: republish every published document that
    /// embeds it, so the host's publish pipeline recomputes their
    /// aggregates.
    ///
    /// Per-owner failures (non-document owner, stale reference, unpublished
    /// owner, access denied) are logged and skipped; only a backend
    /// persistence failure aborts the remainder of the batch and surfaces.
    #[instrument(skip(self), fields(component = %component_id))]
    pub fn on_component_published(&self, component_id: &ContentId) -> PropagationResult<()> {
        let owners = dedup_preserving_order(
            self.index
                .inverse_references(component_id, LinkKind::EmbeddedContent),
        );
        info!(owners = owners.len(), "Component published, updating owners");

        for owner_id in owners {
            let owner = match self.store.try_load(&owner_id) {
                LoadResult::Document(owner) => owner,
                LoadResult::Component(_) => {
                    info!(owner = %owner_id, "Referencing content is not a document, skipping update");
                    continue;
                }
                LoadResult::Unresolved => {
                    info!(owner = %owner_id, "Owner reference no longer resolves, skipping update");
                    continue;
                }
            };

            if !owner.is_published() {
                // Drafts pick up the aggregate on their own next publish.
                info!(name = %owner.name, "Owner is not published, skipping update");
                continue;
            }

            match self.store.save(
                owner.clone(),
                SaveIntent::PublishForceCurrent,
                AccessLevel::NoAccess,
            ) {
                Ok(()) => debug!(name = %owner.name, "Owner republished"),
                Err(SaveError::AccessDenied { name }) => {
                    warn!(name = %name, "Not enough access rights to republish owner, skipping update");
                }
                Err(source @ SaveError::Backend(_)) => {
                    return Err(PropagationError::Persistence {
                        name: owner.name,
                        source,
                    });
                }
            }
        }

        Ok(())
    }

    /// A document is about to be published: synthesize its nested-component
    /// search text into the designated aggregate field of the in-flight
    /// draft.
    ///
    /// Runs at most once per cycle; deliveries raised by this propagation's
    /// own save return untouched. Document types without a text-typed
    /// aggregate target opt out silently.
    #[instrument(skip(self, cycle, event), fields(name = %event.document().name))]
    pub fn on_document_publishing(&self, cycle: &mut PropagationCycle, event: &mut PublishingEvent) {
        if cycle.is_aggregation_in_flight() {
            debug!("Aggregation already in flight for this cycle, skipping");
            return;
        }

        let target = {
            let document = event.document();
            let Some(schema) = self.schemas.fields_of(&document.type_id) else {
                debug!(type_id = %document.type_id, "Type schema unresolved, skipping");
                return;
            };
            match schema.aggregate_target() {
                Some(target) => target.name.clone(),
                None => {
                    debug!(type_id = %document.type_id, "No aggregate target field, type opts out");
                    return;
                }
            }
        };

        let text = self.aggregator.aggregate_composition(event.document());
        info!(field = %target, chars = text.len(), "Writing aggregated search text");
        event.draft_mut().set_field(target, FieldValue::Text(text));

        cycle.mark_aggregation_in_flight();
    }
}

/// The index may hand back the same owner twice (copy operations, an owner
/// embedding one target in two slots); one publish must not republish an
/// owner twice.
fn dedup_preserving_order(owners: Vec<ContentId>) -> Vec<ContentId> {
    let mut seen = HashSet::new();
    owners
        .into_iter()
        .filter(|owner| seen.insert(owner.clone()))
        .collect()
}
