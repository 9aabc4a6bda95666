use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::account::application::{
    domain::events::DomainEvent, ports::outgoing::EventBusPoster,
};

/// Receives every event posted on an `InProcessEventBus`.
pub trait EventSubscriber: Send + Sync {
    fn on_event(&self, event: &DomainEvent);
}

impl<F> EventSubscriber for F
where
    F: Fn(&DomainEvent) + Send + Sync,
{
    fn on_event(&self, event: &DomainEvent) {
        self(event)
    }
}

/// Delivers events synchronously, in subscription order, on the posting thread.
#[derive(Default)]
pub struct InProcessEventBus {
    subscribers: RwLock<Vec<Arc<dyn EventSubscriber>>>,
}

impl fmt::Debug for InProcessEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InProcessEventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl InProcessEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, subscriber: Arc<dyn EventSubscriber>) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(subscriber);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl EventBusPoster for InProcessEventBus {
    fn post_event(&self, event: DomainEvent) {
        // Snapshot so a subscriber may subscribe others without deadlocking.
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        debug!(
            event = event.name(),
            subscribers = subscribers.len(),
            "Posting domain event"
        );

        for subscriber in subscribers {
            subscriber.on_event(&event);
        }
    }
}
