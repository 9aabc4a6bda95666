use serde::Serialize;

use super::entities::UserId;

/// Posted after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoggedInEvent;

/// Posted after the remote username of `user_id` changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetailsChangedEvent {
    pub user_id: UserId,
}

/// Posted after a fresh profile for `user_id` landed in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileFetchedEvent {
    pub user_id: UserId,
}

/// Everything the account use cases can post on the event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    LoggedIn(LoggedInEvent),
    UserDetailsChanged(UserDetailsChangedEvent),
    UserProfileFetched(UserProfileFetchedEvent),
}

impl DomainEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::LoggedIn(_) => "logged_in",
            DomainEvent::UserDetailsChanged(_) => "user_details_changed",
            DomainEvent::UserProfileFetched(_) => "user_profile_fetched",
        }
    }
}

impl From<LoggedInEvent> for DomainEvent {
    fn from(event: LoggedInEvent) -> Self {
        DomainEvent::LoggedIn(event)
    }
}

impl From<UserDetailsChangedEvent> for DomainEvent {
    fn from(event: UserDetailsChangedEvent) -> Self {
        DomainEvent::UserDetailsChanged(event)
    }
}

impl From<UserProfileFetchedEvent> for DomainEvent {
    fn from(event: UserProfileFetchedEvent) -> Self {
        DomainEvent::UserProfileFetched(event)
    }
}
