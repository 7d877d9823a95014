/// Tests for the two propagation triggers and the reentrancy guard.
use crate::cycle::PropagationCycle;
use crate::error::PropagationError;
use crate::event::PublishingEvent;
use crate::propagator::Propagator;
use blocksearch_content::{
    Component, CompositionSlot, ContentId, ContentSchema, Document, FieldDef, FieldKind,
    FieldRole, FieldValue, PublicationStatus, TypeId,
};
use blocksearch_store::{
    InMemoryContentStore, InMemoryReferenceIndex, InMemorySchemaRegistry, LinkKind, SaveIntent,
};
use std::rc::Rc;

struct Fixture {
    store: Rc<InMemoryContentStore>,
    index: Rc<InMemoryReferenceIndex>,
    schemas: Rc<InMemorySchemaRegistry>,
    propagator: Propagator,
}

fn fixture() -> Fixture {
    let store = Rc::new(InMemoryContentStore::new());
    let index = Rc::new(InMemoryReferenceIndex::new());
    let schemas = Rc::new(InMemorySchemaRegistry::new());
    let propagator = Propagator::new(index.clone(), store.clone(), schemas.clone());

    schemas.register(
        ContentSchema::new(TypeId::new("page"))
            .with_field(FieldDef::new("title", FieldKind::Text).searchable())
            .with_field(FieldDef::new("main", FieldKind::Composition))
            .with_field(
                FieldDef::new("search_text", FieldKind::Text)
                    .with_role(FieldRole::AggregatedSearchTarget),
            ),
    );
    schemas.register(
        ContentSchema::new(TypeId::new("text-block"))
            .with_field(FieldDef::new("body", FieldKind::Text).searchable()),
    );

    Fixture {
        store,
        index,
        schemas,
        propagator,
    }
}

fn block(id: &str, body: &str) -> Component {
    Component::new(ContentId::new(id), id.to_uppercase(), TypeId::new("text-block"))
        .with_field("body", FieldValue::Text(body.into()))
}

fn page(id: &str, slots: Vec<&str>) -> Document {
    Document::new(ContentId::new(id), id.to_uppercase(), TypeId::new("page"))
        .with_status(PublicationStatus::Published)
        .with_field(
            "main",
            FieldValue::Composition(
                slots
                    .into_iter()
                    .map(|s| CompositionSlot::new(ContentId::new(s)))
                    .collect(),
            ),
        )
}

fn embed(f: &Fixture, owner: &str, target: &str) {
    f.index.add_link(
        ContentId::new(owner),
        ContentId::new(target),
        LinkKind::EmbeddedContent,
    );
}

#[test]
fn test_published_owner_is_republished() {
    let f = fixture();
    f.store.insert_component(block("b1", "hello"));
    f.store.insert_document(page("p1", vec!["b1"]));
    embed(&f, "p1", "b1");

    f.propagator
        .on_component_published(&ContentId::new("b1"))
        .unwrap();

    assert_eq!(
        f.store.saved(),
        vec![(ContentId::new("p1"), SaveIntent::PublishForceCurrent)]
    );
}

#[test]
fn test_draft_owner_triggers_no_save() {
    let f = fixture();
    f.store.insert_component(block("b1", "hello"));
    f.store.insert_document(page("p1", vec!["b1"]).with_status(PublicationStatus::Draft));
    embed(&f, "p1", "b1");

    f.propagator
        .on_component_published(&ContentId::new("b1"))
        .unwrap();

    assert!(f.store.saved().is_empty());
}

#[test]
fn test_non_document_owner_is_skipped() {
    let f = fixture();
    f.store.insert_component(block("b1", "hello"));
    // The index claims a component owns the published block
    f.store.insert_component(block("b2", "container"));
    embed(&f, "b2", "b1");

    f.propagator
        .on_component_published(&ContentId::new("b1"))
        .unwrap();

    assert!(f.store.saved().is_empty());
}

#[test]
fn test_stale_owner_reference_is_skipped() {
    let f = fixture();
    f.store.insert_component(block("b1", "hello"));
    embed(&f, "deleted-page", "b1");

    f.propagator
        .on_component_published(&ContentId::new("b1"))
        .unwrap();

    assert!(f.store.saved().is_empty());
}

#[test]
fn test_duplicate_owners_republish_once() {
    let f = fixture();
    f.store.insert_component(block("b1", "hello"));
    f.store.insert_document(page("p1", vec!["b1", "b1"]));
    embed(&f, "p1", "b1");
    embed(&f, "p1", "b1");

    f.propagator
        .on_component_published(&ContentId::new("b1"))
        .unwrap();

    assert_eq!(f.store.saved().len(), 1);
}

#[test]
fn test_navigation_links_are_ignored() {
    let f = fixture();
    f.store.insert_component(block("b1", "hello"));
    f.store.insert_document(page("p1", vec![]));
    f.index.add_link(
        ContentId::new("p1"),
        ContentId::new("b1"),
        LinkKind::Navigation,
    );

    f.propagator
        .on_component_published(&ContentId::new("b1"))
        .unwrap();

    assert!(f.store.saved().is_empty());
}

#[test]
fn test_access_denied_does_not_abort_the_batch() {
    let f = fixture();
    f.store.insert_component(block("b1", "hello"));
    f.store.insert_document(page("p1", vec!["b1"]));
    f.store.insert_document(page("p2", vec!["b1"]));
    f.store.deny_save(ContentId::new("p1"));
    embed(&f, "p1", "b1");
    embed(&f, "p2", "b1");

    f.propagator
        .on_component_published(&ContentId::new("b1"))
        .unwrap();

    assert_eq!(
        f.store.saved(),
        vec![(ContentId::new("p2"), SaveIntent::PublishForceCurrent)]
    );
}

#[test]
fn test_backend_failure_surfaces_to_host() {
    let f = fixture();
    f.store.insert_component(block("b1", "hello"));
    f.store.insert_document(page("p1", vec!["b1"]));
    f.store.fail_save(ContentId::new("p1"));
    embed(&f, "p1", "b1");

    let err = f
        .propagator
        .on_component_published(&ContentId::new("b1"))
        .unwrap_err();
    assert!(matches!(err, PropagationError::Persistence { .. }));
}

#[test]
fn test_publishing_writes_aggregate_into_draft() {
    let f = fixture();
    f.store.insert_component(block("b1", "<p>hello world</p>"));

    let mut cycle = PropagationCycle::new();
    let mut event = PublishingEvent::new(page("p1", vec!["b1"]));
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    assert!(cycle.is_aggregation_in_flight());
    let effective = event.into_effective();
    assert_eq!(
        effective.fields.get("search_text"),
        Some(&FieldValue::Text("hello world".into()))
    );
}

#[test]
fn test_publishing_excludes_own_flat_fields() {
    let f = fixture();
    f.store.insert_component(block("b1", "embedded"));

    let mut cycle = PropagationCycle::new();
    let mut event = PublishingEvent::new(
        page("p1", vec!["b1"]).with_field("title", FieldValue::Text("own title".into())),
    );
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    assert_eq!(
        event.into_effective().fields.get("search_text"),
        Some(&FieldValue::Text("embedded".into()))
    );
}

#[test]
fn test_second_delivery_in_same_cycle_is_a_no_op() {
    let f = fixture();
    f.store.insert_component(block("b1", "first"));

    let mut cycle = PropagationCycle::new();
    let mut event = PublishingEvent::new(page("p1", vec!["b1"]));
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    // The block changes under the cycle; a re-delivered event must not
    // recompute.
    f.store.insert_component(block("b1", "second"));
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    assert_eq!(
        event.into_effective().fields.get("search_text"),
        Some(&FieldValue::Text("first".into()))
    );
}

#[test]
fn test_completed_cycle_aggregates_again() {
    let f = fixture();
    f.store.insert_component(block("b1", "first"));

    let mut cycle = PropagationCycle::new();
    let mut event = PublishingEvent::new(page("p1", vec!["b1"]));
    f.propagator.on_document_publishing(&mut cycle, &mut event);
    cycle.complete();

    f.store.insert_component(block("b1", "second"));
    let mut event = PublishingEvent::new(page("p1", vec!["b1"]));
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    assert_eq!(
        event.into_effective().fields.get("search_text"),
        Some(&FieldValue::Text("second".into()))
    );
}

#[test]
fn test_type_without_aggregate_target_opts_out() {
    let f = fixture();
    f.schemas.register(
        ContentSchema::new(TypeId::new("landing-page"))
            .with_field(FieldDef::new("main", FieldKind::Composition)),
    );
    f.store.insert_component(block("b1", "hello"));

    let mut cycle = PropagationCycle::new();
    let mut event = PublishingEvent::new(
        Document::new(ContentId::new("p1"), "P1", TypeId::new("landing-page"))
            .with_status(PublicationStatus::Published)
            .with_field(
                "main",
                FieldValue::Composition(vec![CompositionSlot::new(ContentId::new("b1"))]),
            ),
    );
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    assert!(!event.has_draft());
    assert!(!cycle.is_aggregation_in_flight());
}

#[test]
fn test_mistyped_aggregate_target_opts_out() {
    let f = fixture();
    f.schemas.register(
        ContentSchema::new(TypeId::new("odd-page"))
            .with_field(FieldDef::new("main", FieldKind::Composition))
            .with_field(
                FieldDef::new("search_text", FieldKind::Number)
                    .with_role(FieldRole::AggregatedSearchTarget),
            ),
    );

    let mut cycle = PropagationCycle::new();
    let mut event = PublishingEvent::new(
        Document::new(ContentId::new("p1"), "P1", TypeId::new("odd-page"))
            .with_status(PublicationStatus::Published),
    );
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    assert!(!event.has_draft());
}

#[test]
fn test_unknown_document_type_is_skipped() {
    let f = fixture();

    let mut cycle = PropagationCycle::new();
    let mut event = PublishingEvent::new(
        Document::new(ContentId::new("p1"), "P1", TypeId::new("unregistered"))
            .with_status(PublicationStatus::Published),
    );
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    assert!(!event.has_draft());
    assert!(!cycle.is_aggregation_in_flight());
}

#[test]
fn test_empty_composition_writes_empty_aggregate() {
    let f = fixture();

    let mut cycle = PropagationCycle::new();
    let mut event = PublishingEvent::new(page("p1", vec![]));
    f.propagator.on_document_publishing(&mut cycle, &mut event);

    // An opted-in type always gets the field written, even when empty:
    // a block removed from the last slot must clear stale text.
    assert_eq!(
        event.into_effective().fields.get("search_text"),
        Some(&FieldValue::Text(String::new()))
    );
}
