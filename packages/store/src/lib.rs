//! # Blocksearch Store Contracts
//!
//! The narrow contracts the propagation engine consumes from its host: a
//! content store, a reference index, and a schema registry. The host owns
//! the real implementations; this package defines the traits plus in-memory
//! implementations used by tests and harnesses.
//!
//! ## Design notes
//!
//! - Loading returns a closed [`LoadResult`] variant instead of a content
//!   object that callers downcast. `Unresolved` is a value, not an error:
//!   stale and deleted references are an expected state of the host's data.
//! - All traits take `&self`. The host delivers events strictly one at a
//!   time on a single thread, so implementations use interior mutability
//!   rather than locks.

pub mod memory;
pub mod reference_index;
pub mod schema_registry;
pub mod store;

pub use memory::{InMemoryContentStore, InMemoryReferenceIndex, InMemorySchemaRegistry};
pub use reference_index::{LinkKind, ReferenceIndex, SoftLink};
pub use schema_registry::SchemaRegistry;
pub use store::{AccessLevel, ContentStore, LoadResult, SaveError, SaveIntent, SaveResult};
