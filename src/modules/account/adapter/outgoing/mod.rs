pub mod cache;
pub mod event_bus;
pub mod http;

pub use cache::{InMemoryAuthTokenCache, InMemoryUserProfilesCache, InMemoryUsersCache};
pub use event_bus::{EventSubscriber, InProcessEventBus, LoggingEventSubscriber};
