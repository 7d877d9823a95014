use blocksearch_store::SaveError;
use thiserror::Error;

/// The only failure that crosses the propagator boundary.
///
/// Everything else in the taxonomy (unresolved references, schema misses,
/// type mismatches, access-denied republishes) is recovered locally and
/// reported as a diagnostic event, never surfaced.
#[derive(Error, Debug)]
pub enum PropagationError {
    #[error("failed to persist republish of '{name}': {source}")]
    Persistence {
        name: String,
        #[source]
        source: SaveError,
    },
}

pub type PropagationResult<T> = Result<T, PropagationError>;
