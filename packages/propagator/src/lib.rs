//! # Blocksearch Propagator
//!
//! Orchestrates the two triggers that keep a document's aggregated search
//! text in sync with the components it embeds:
//!
//! - **Component published**: resolve the documents that embed the
//!   component through the reference index and republish each published one,
//!   so the host's own publish pipeline recomputes their aggregate.
//! - **Document publishing**: fired before a document's save completes;
//!   compute the nested-component text, write it into a mutable draft of the
//!   in-flight document, and let the change ride the caller's own save.
//!
//! ## Reentrancy
//!
//! The second trigger fires for the propagator's own synthesized saves too.
//! Each host save transition owns one [`PropagationCycle`]; the first
//! aggregation of a cycle marks it in-flight and every later delivery within
//! the same cycle returns untouched. The cycle is a value the host threads
//! through the call chain, not shared module state, so interleaved logical
//! cycles each carry their own guard. The host completes the cycle when its
//! enclosing save returns, success or failure.
//!
//! ## Failure contract
//!
//! Propagation is best-effort enrichment: it never blocks or fails the
//! triggering publish. Access-denied republishes are warned about per
//! document and the batch continues; a missing or mistyped aggregate target
//! is a silent per-document no-op; only backend persistence failures
//! surface, as [`PropagationError`], for the host to schedule retries.

pub mod cycle;
pub mod error;
pub mod event;
pub mod events;
pub mod module;
pub mod propagator;

#[cfg(test)]
mod tests_propagator;

pub use cycle::{CycleState, PropagationCycle};
pub use error::{PropagationError, PropagationResult};
pub use event::PublishingEvent;
pub use events::{ContentEvents, InMemoryEventBus, PropagationHandler, SubscriptionId};
pub use module::PropagationModule;
pub use propagator::Propagator;
