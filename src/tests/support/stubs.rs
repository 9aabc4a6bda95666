use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::account::application::domain::entities::{AuthToken, User, UserId, UserProfile};
use crate::account::application::domain::events::DomainEvent;
use crate::account::application::ports::outgoing::{
    AuthTokenCache, EndpointOutcome, EventBusPoster, LoginEndpoint, LoginPayload, NetworkError,
    UpdateUsernameEndpoint, UpdateUsernamePayload, UserProfileEndpoint, UserProfilePayload,
    UserProfilesCache, UsersCache,
};

pub type EndpointResult<T> = Result<EndpointOutcome<T>, NetworkError>;

/// Endpoint that replays queued results and records the arguments of every call.
///
/// Clones share the same script, so a test can keep one handle after moving
/// the other into a service.
#[derive(Clone)]
pub struct ScriptedEndpoint<T> {
    responses: Arc<Mutex<VecDeque<EndpointResult<T>>>>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl<T> ScriptedEndpoint<T> {
    pub fn replying(responses: impl IntoIterator<Item = EndpointResult<T>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, args: &[&str]) -> EndpointResult<T> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(|a| a.to_string()).collect());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("endpoint called more often than scripted")
    }
}

impl LoginEndpoint for ScriptedEndpoint<LoginPayload> {
    fn login(&self, username: &str, password: &str) -> EndpointResult<LoginPayload> {
        self.next(&[username, password])
    }
}

impl UpdateUsernameEndpoint for ScriptedEndpoint<UpdateUsernamePayload> {
    fn update_username(
        &self,
        user_id: &UserId,
        username: &str,
    ) -> EndpointResult<UpdateUsernamePayload> {
        self.next(&[user_id.value(), username])
    }
}

impl UserProfileEndpoint for ScriptedEndpoint<UserProfilePayload> {
    fn get_user_profile(&self, user_id: &UserId) -> EndpointResult<UserProfilePayload> {
        self.next(&[user_id.value()])
    }
}

#[derive(Default)]
pub struct RecordingAuthTokenCache {
    pub writes: Mutex<Vec<AuthToken>>,
}

impl AuthTokenCache for RecordingAuthTokenCache {
    fn cache_auth_token(&self, auth_token: AuthToken) {
        self.writes.lock().unwrap().push(auth_token);
    }

    fn get_auth_token(&self) -> Option<AuthToken> {
        self.writes.lock().unwrap().last().cloned()
    }
}

#[derive(Default)]
pub struct RecordingUsersCache {
    pub writes: Mutex<Vec<User>>,
}

impl UsersCache for RecordingUsersCache {
    fn cache_user(&self, user: User) {
        self.writes.lock().unwrap().push(user);
    }

    fn get_user(&self, user_id: &UserId) -> Option<User> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|u| &u.user_id == user_id)
            .cloned()
    }
}

#[derive(Default)]
pub struct RecordingUserProfilesCache {
    pub writes: Mutex<Vec<UserProfile>>,
}

impl UserProfilesCache for RecordingUserProfilesCache {
    fn cache_user_profile(&self, profile: UserProfile) {
        self.writes.lock().unwrap().push(profile);
    }

    fn get_user_profile(&self, user_id: &UserId) -> Option<UserProfile> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|p| &p.user_id == user_id)
            .cloned()
    }
}

#[derive(Default)]
pub struct RecordingEventBus {
    pub posted: Mutex<Vec<DomainEvent>>,
}

impl RecordingEventBus {
    pub fn events(&self) -> Vec<DomainEvent> {
        self.posted.lock().unwrap().clone()
    }
}

impl EventBusPoster for RecordingEventBus {
    fn post_event(&self, event: DomainEvent) {
        self.posted.lock().unwrap().push(event);
    }
}
