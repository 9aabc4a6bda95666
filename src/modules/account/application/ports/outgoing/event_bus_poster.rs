use crate::account::application::domain::events::DomainEvent;

/// Fire-and-forget publication of domain events.
///
/// Implementations own delivery; callers never learn whether anyone listened.
pub trait EventBusPoster: Send + Sync {
    fn post_event(&self, event: DomainEvent);
}
