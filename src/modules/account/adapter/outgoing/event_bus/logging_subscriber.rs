use tracing::{info, warn};

use crate::account::application::domain::events::DomainEvent;

use super::EventSubscriber;

/// Writes every event to the `tracing` output as JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingEventSubscriber;

impl LoggingEventSubscriber {
    pub fn render(event: &DomainEvent) -> Option<String> {
        match serde_json::to_string(event) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!(event = event.name(), error = %e, "Failed to serialize domain event");
                None
            }
        }
    }
}

impl EventSubscriber for LoggingEventSubscriber {
    fn on_event(&self, event: &DomainEvent) {
        if let Some(payload) = Self::render(event) {
            info!(event = event.name(), %payload, "Domain event");
        }
    }
}
