use crate::cycle::PropagationCycle;
use crate::error::PropagationResult;
use crate::event::PublishingEvent;
use crate::propagator::Propagator;
use blocksearch_content::ContentId;
use std::rc::Rc;

pub type SubscriptionId = u64;

/// Handler for the two content notifications the host delivers.
pub trait PropagationHandler {
    fn component_published(&self, component_id: &ContentId) -> PropagationResult<()>;

    fn document_publishing(&self, cycle: &mut PropagationCycle, event: &mut PublishingEvent);
}

impl PropagationHandler for Propagator {
    fn component_published(&self, component_id: &ContentId) -> PropagationResult<()> {
        self.on_component_published(component_id)
    }

    fn document_publishing(&self, cycle: &mut PropagationCycle, event: &mut PublishingEvent) {
        self.on_document_publishing(cycle, event)
    }
}

/// The host's event bus, reduced to the shape the module needs: attach a
/// handler at start, detach it at stop.
pub trait ContentEvents {
    fn attach(&mut self, handler: Rc<dyn PropagationHandler>) -> SubscriptionId;

    fn detach(&mut self, subscription: SubscriptionId);
}

/// Concrete single-threaded bus for harnesses and tests.
///
/// Delivery is strictly sequential: each emit runs every handler to
/// completion before returning, which is exactly the host model the
/// propagation engine assumes.
#[derive(Default)]
pub struct InMemoryEventBus {
    handlers: Vec<(SubscriptionId, Rc<dyn PropagationHandler>)>,
    next_id: SubscriptionId,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn emit_component_published(&self, component_id: &ContentId) -> PropagationResult<()> {
        for (_, handler) in &self.handlers {
            handler.component_published(component_id)?;
        }
        Ok(())
    }

    pub fn emit_document_publishing(
        &self,
        cycle: &mut PropagationCycle,
        event: &mut PublishingEvent,
    ) {
        for (_, handler) in &self.handlers {
            handler.document_publishing(cycle, event);
        }
    }
}

impl ContentEvents for InMemoryEventBus {
    fn attach(&mut self, handler: Rc<dyn PropagationHandler>) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    fn detach(&mut self, subscription: SubscriptionId) {
        self.handlers.retain(|(id, _)| *id != subscription);
    }
}
