//! # Blocksearch Content Model
//!
//! The content model shared by every other blocksearch package: documents,
//! components, field values, composition slots, and the content-type schema
//! that drives the aggregation walk.
//!
//! ## Documents vs. Components
//!
//! A [`Document`] is an independently indexable content item, the unit the
//! search engine sees. A [`Component`] (a "block") is embeddable content with
//! no index identity of its own; it is only ever reached through a
//! composition slot or an inline block field of some other item. This split
//! is a hard rule of the model: components are never index roots and never
//! republished on their own.
//!
//! ## Schema-declared roles
//!
//! Field discovery is schema-driven, not reflective. A document type opts
//! into aggregation by declaring exactly one text field with
//! [`FieldRole::AggregatedSearchTarget`]; [`ContentSchema::aggregate_target`]
//! resolves it by role when asked.

pub mod model;
pub mod schema;

pub use model::{
    Component, ContentData, ContentId, Document, FieldValue, CompositionSlot, PublicationStatus,
};
pub use schema::{ContentSchema, FieldDef, FieldKind, FieldRole, TypeId};
