use crate::events::{ContentEvents, SubscriptionId};
use crate::propagator::Propagator;
use std::rc::Rc;
use tracing::info;

/// Module lifecycle wrapper: subscribes the propagator to the host's
/// content events on initialize and reverses that on uninitialize.
///
/// Initialize is idempotent: the host may retry it after a failed startup
/// sequence without double-subscribing.
pub struct PropagationModule {
    propagator: Rc<Propagator>,
    subscription: Option<SubscriptionId>,
}

impl PropagationModule {
    pub fn new(propagator: Rc<Propagator>) -> Self {
        Self {
            propagator,
            subscription: None,
        }
    }

    pub fn initialize(&mut self, events: &mut dyn ContentEvents) {
        if self.subscription.is_some() {
            return;
        }
        self.subscription = Some(events.attach(self.propagator.clone()));
        info!("Propagation module initialized");
    }

    pub fn uninitialize(&mut self, events: &mut dyn ContentEvents) {
        if let Some(subscription) = self.subscription.take() {
            events.detach(subscription);
            info!("Propagation module uninitialized");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.subscription.is_some()
    }
}
