//! Session persistence.
//!
//! A session is the pairing of the opaque API token with the locally cached
//! user profile it authorizes. The pair is owned exclusively by the store:
//! both halves are written together and cleared together, and a half-present
//! pair left behind by external interference is treated as no session at all.

#[cfg(test)]
use std::cell::RefCell;

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::models::User;
use thiserror::Error;

/// Local storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";
/// Local storage key holding the serialized cached profile.
pub const USER_KEY: &str = "user";

/// The persisted pairing of token and cached user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque credential minted and verified only by the API.
    pub token: String,

    /// Locally cached profile; refreshed from the dashboard fetch.
    pub user: User,
}

impl Session {
    /// Assemble a session only when both halves are present. A partial pair
    /// is corruption from an external cause and must not be destructured.
    #[must_use]
    pub fn from_parts(token: Option<String>, user: Option<User>) -> Option<Self> {
        match (token, user) {
            (Some(token), Some(user)) => Some(Self { token, user }),
            _ => None,
        }
    }
}

/// Failure writing to the underlying storage. Surfaced, never swallowed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("session storage is unavailable: {0}")]
pub struct SessionStoreError(pub String);

/// Persistence seam for the session, so controllers can be exercised against
/// an in-memory fake instead of real browser storage.
pub trait SessionStore {
    /// Persist both halves of the session in one step.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Load the session; absent unless both halves are present and readable.
    fn load(&self) -> Option<Session>;

    /// Remove both halves unconditionally. Idempotent.
    fn clear(&self);

    /// Whether a usable session is present. Partial state counts as absent,
    /// so the route guard and the loaders always agree.
    fn has_session(&self) -> bool {
        self.load().is_some()
    }
}

/// Browser-backed store over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        // User first, token last: load() keys presence off the pair, and a
        // user-only remainder after a partial write reads as absent.
        LocalStorage::set(USER_KEY, &session.user)
            .map_err(|err| SessionStoreError(err.to_string()))?;
        if let Err(err) = LocalStorage::set(TOKEN_KEY, &session.token) {
            // When the token write fails over an existing session, the new
            // user is now paired with the old token. Remove both so the
            // failure reads as no session rather than a cross-matched one.
            self.clear();
            return Err(SessionStoreError(err.to_string()));
        }
        Ok(())
    }

    fn load(&self) -> Option<Session> {
        let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let user: Option<User> = LocalStorage::get(USER_KEY).ok();
        Session::from_parts(token, user)
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
    }
}

/// In-memory store used by tests. Can simulate unavailable storage and
/// externally corrupted half-present state.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
    user: RefCell<Option<User>>,
    unavailable: RefCell<bool>,
    token_write_fails: RefCell<bool>,
}

#[cfg(test)]
impl MemorySessionStore {
    /// Make subsequent `save` calls fail, as if storage were unavailable.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.borrow_mut() = unavailable;
    }

    /// Make `save` fail on its second write, after the user half landed.
    pub fn set_token_write_failure(&self, fails: bool) {
        *self.token_write_fails.borrow_mut() = fails;
    }

    /// Plant a token with no matching user, as external corruption would.
    pub fn plant_orphan_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
        *self.user.borrow_mut() = None;
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        if *self.unavailable.borrow() {
            return Err(SessionStoreError("storage disabled".to_string()));
        }
        *self.user.borrow_mut() = Some(session.user.clone());
        if *self.token_write_fails.borrow() {
            // Same contract as the browser store: a half-applied overwrite
            // must not survive as a cross-matched pair.
            self.clear();
            return Err(SessionStoreError("token write rejected".to_string()));
        }
        *self.token.borrow_mut() = Some(session.token.clone());
        Ok(())
    }

    fn load(&self) -> Option<Session> {
        Session::from_parts(self.token.borrow().clone(), self.user.borrow().clone())
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: None,
        }
    }

    fn sample_session() -> Session {
        Session {
            token: "tok-123".to_string(),
            user: sample_user(),
        }
    }

    /// Tests that save followed by load returns exactly the saved pair
    #[test]
    fn test_save_then_load_round_trips() {
        let store = MemorySessionStore::default();
        let session = sample_session();
        store.save(&session).unwrap();
        assert_eq!(store.load(), Some(session));
        assert!(store.has_session());
    }

    /// Tests that clear removes both halves and is idempotent
    #[test]
    fn test_clear_then_load_is_absent() {
        let store = MemorySessionStore::default();
        store.save(&sample_session()).unwrap();
        store.clear();
        assert_eq!(store.load(), None);
        assert!(!store.has_session());
        store.clear();
        assert_eq!(store.load(), None);
    }

    /// Tests that a half-present pair loads as absent
    #[test]
    fn test_partial_state_loads_as_absent() {
        let store = MemorySessionStore::default();
        store.plant_orphan_token("tok-orphan");
        assert_eq!(store.load(), None);

        assert_eq!(Session::from_parts(Some("tok".to_string()), None), None);
        assert_eq!(Session::from_parts(None, Some(sample_user())), None);
        assert_eq!(Session::from_parts(None, None), None);
    }

    /// Tests that storage unavailability is surfaced from save
    #[test]
    fn test_unavailable_storage_is_surfaced() {
        let store = MemorySessionStore::default();
        store.set_unavailable(true);
        let err = store.save(&sample_session()).unwrap_err();
        assert!(err.to_string().contains("unavailable"));
        assert_eq!(store.load(), None);
    }

    /// Tests that a save fully replaces the previous session
    #[test]
    fn test_save_replaces_both_fields() {
        let store = MemorySessionStore::default();
        store.save(&sample_session()).unwrap();

        let replacement = Session {
            token: "tok-456".to_string(),
            user: User {
                id: "u-2".to_string(),
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                created_at: None,
            },
        };
        store.save(&replacement).unwrap();
        assert_eq!(store.load(), Some(replacement));
    }

    /// Tests that a failed overwrite never leaves a cross-matched pair
    #[test]
    fn test_failed_overwrite_leaves_no_cross_matched_pair() {
        let store = MemorySessionStore::default();
        store.save(&sample_session()).unwrap();
        store.set_token_write_failure(true);

        let replacement = Session {
            token: "tok-456".to_string(),
            user: User {
                id: "u-2".to_string(),
                name: "Grace".to_string(),
                email: "grace@example.com".to_string(),
                created_at: None,
            },
        };
        store.save(&replacement).unwrap_err();

        // Neither the old session nor an old-token/new-user hybrid remains.
        assert_eq!(store.load(), None);
        assert!(!store.has_session());
    }
}
