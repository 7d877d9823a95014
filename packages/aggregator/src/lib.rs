//! # Blocksearch Aggregator
//!
//! Extracts a flattened text blob of all searchable content reachable from a
//! document or component, descending into embedded components.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Aggregation is fully deterministic.**
//!
//! For an unchanged content graph, [`Aggregator::aggregate`] produces
//! byte-identical output on every invocation:
//!
//! - Traversal order is schema field declaration order outermost, slot order
//!   innermost, depth-first. Never map iteration order.
//! - Fragments are joined with a single space; markup is stripped from the
//!   final joined string, once.
//! - No time, randomness, or environment dependence.
//!
//! Determinism is what makes the synthesized aggregate field idempotent: a
//! republish over an unchanged graph writes the same bytes it wrote before.
//!
//! ## Failure policy
//!
//! The walk never aborts. Unresolved slot references, fields missing from an
//! instance, schema/value mismatches, and unloadable type schemas are each
//! skipped with a diagnostic event; partial aggregation is always
//! preferable to none, and none of these conditions can fail the caller.
//!
//! ## Recursion boundary
//!
//! The walk recurses only into components (inline block fields and slots
//! that resolve to components). A slot that resolves to a document is a
//! teaser of an independent index root and contributes nothing; that
//! boundary is also what makes the walk finite.

pub mod aggregator;
pub mod markup;


pub use aggregator::Aggregator;
pub use markup::strip_markup;
