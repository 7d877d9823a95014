use crate::markup::strip_markup;
use blocksearch_content::{ContentData, FieldDef, FieldValue};
use blocksearch_store::{ContentStore, LoadResult, SchemaRegistry};
use std::rc::Rc;
use tracing::{debug, instrument};

/// Recursive searchable-text walk over a content item.
///
/// Depends only on the host's content store (slot resolution) and schema
/// registry (field definitions). Stateless between calls.
pub struct Aggregator {
    store: Rc<dyn ContentStore>,
    schemas: Rc<dyn SchemaRegistry>,
}

impl Aggregator {
    pub fn new(store: Rc<dyn ContentStore>, schemas: Rc<dyn SchemaRegistry>) -> Self {
        Self { store, schemas }
    }

    /// Flattened searchable text of the item and everything it transitively
    /// embeds: searchable fields, inline block fields, and composition
    /// slots that resolve to components.
    ///
    /// An unresolvable type schema yields empty text, never an error.
    #[instrument(skip(self, content), fields(type_id = %content.type_id()))]
    pub fn aggregate(&self, content: &dyn ContentData) -> String {
        let mut fragments = Vec::new();
        self.collect(content, &mut fragments);
        finish(fragments)
    }

    /// Same walk restricted to composition fields.
    ///
    /// This is the publishing-path variant: a document's own flat searchable
    /// fields are indexed natively and must not be duplicated into the
    /// aggregate; only the nested-component contribution is synthesized.
    #[instrument(skip(self, content), fields(type_id = %content.type_id()))]
    pub fn aggregate_composition(&self, content: &dyn ContentData) -> String {
        let Some(schema) = self.schemas.fields_of(content.type_id()) else {
            debug!(type_id = %content.type_id(), "Type schema unresolved, aggregating nothing");
            return String::new();
        };

        let mut fragments = Vec::new();
        for field in schema.fields.iter().filter(|f| f.is_composition()) {
            self.collect_composition_field(content, field, &mut fragments);
        }
        finish(fragments)
    }

    /// Full walk: every field of the schema, in declaration order.
    fn collect(&self, content: &dyn ContentData, fragments: &mut Vec<String>) {
        let Some(schema) = self.schemas.fields_of(content.type_id()) else {
            debug!(type_id = %content.type_id(), "Type schema unresolved, aggregating nothing");
            return;
        };

        for field in &schema.fields {
            match content.field(&field.name) {
                // Inline block: traversed regardless of its own searchable
                // flag, since its contribution is its nested searchable fields.
                Some(FieldValue::Block(component)) => {
                    debug!(field = %field.name, block = %component.name, "Descending into inline block");
                    self.collect(component, fragments);
                }
                Some(value) if field.is_composition() => match value {
                    FieldValue::Composition(_) => {
                        self.collect_composition_field(content, field, fragments)
                    }
                    _ => {
                        debug!(field = %field.name, "Composition field holds a non-composition value, skipping");
                    }
                },
                Some(value) if field.searchable => {
                    let text = value.render_text();
                    if !text.is_empty() {
                        fragments.push(text);
                    }
                }
                Some(_) => {}
                None => {
                    debug!(field = %field.name, "Field missing on instance, skipping");
                }
            }
        }
    }

    /// One composition field: resolve each slot in order, recurse into
    /// components, skip everything else silently.
    fn collect_composition_field(
        &self,
        content: &dyn ContentData,
        field: &FieldDef,
        fragments: &mut Vec<String>,
    ) {
        let slots = match content.field(&field.name) {
            Some(FieldValue::Composition(slots)) => slots,
            Some(_) => {
                debug!(field = %field.name, "Composition field holds a non-composition value, skipping");
                return;
            }
            None => {
                debug!(field = %field.name, "Composition field missing on instance, skipping");
                return;
            }
        };

        for slot in slots {
            match self.store.try_load(&slot.reference) {
                LoadResult::Component(component) => {
                    debug!(field = %field.name, component = %component.name, "Descending into slot component");
                    self.collect(&component, fragments);
                }
                LoadResult::Document(document) => {
                    // A document in a slot is a teaser of an independent
                    // index root; it is never re-aggregated from here.
                    debug!(field = %field.name, document = %document.name, "Slot item is a document, skipping");
                }
                LoadResult::Unresolved => {
                    debug!(field = %field.name, reference = %slot.reference, "Slot reference unresolved, skipping");
                }
            }
        }
    }
}

fn finish(fragments: Vec<String>) -> String {
    strip_markup(&fragments.join(" "))
}
