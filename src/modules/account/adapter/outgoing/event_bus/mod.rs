mod in_process_event_bus;
mod logging_subscriber;

pub use in_process_event_bus::{EventSubscriber, InProcessEventBus};
pub use logging_subscriber::LoggingEventSubscriber;
