//! In-memory caches.
//!
//! Every write takes the lock for its own duration only, so concurrent writers
//! to the same key resolve as last-writer-wins. There is no compare-and-swap.

mod auth_token_cache_memory;
mod user_profiles_cache_memory;
mod users_cache_memory;

pub use auth_token_cache_memory::InMemoryAuthTokenCache;
pub use user_profiles_cache_memory::InMemoryUserProfilesCache;
pub use users_cache_memory::InMemoryUsersCache;
