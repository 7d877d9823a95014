/// State of one propagation cycle: `Idle -> AggregationInFlight -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CycleState {
    #[default]
    Idle,
    AggregationInFlight,
}

/// Per-cycle reentrancy guard.
///
/// One value exists per host save transition and is passed down the call
/// chain with every `document_publishing` delivery of that transition. It is
/// a plain value, not a concurrency primitive: event delivery is strictly
/// single-threaded, and the guard only detects same-thread re-entry caused
/// by the propagator's own synthesized save.
///
/// The host must call [`complete`](PropagationCycle::complete) once the
/// enclosing save returns, on success and failure alike; a cycle left
/// in-flight would suppress every later aggregation delivered on it.
#[derive(Debug, Default)]
pub struct PropagationCycle {
    state: CycleState,
}

impl PropagationCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CycleState {
        self.state
    }

    pub fn is_aggregation_in_flight(&self) -> bool {
        self.state == CycleState::AggregationInFlight
    }

    pub fn mark_aggregation_in_flight(&mut self) {
        self.state = CycleState::AggregationInFlight;
    }

    /// Unconditional transition back to `Idle`.
    pub fn complete(&mut self) {
        self.state = CycleState::Idle;
    }
}
