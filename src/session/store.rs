//! Persistent Session Store
//!
//! Persists the session token and user identity in a synchronous key-value
//! store so the session survives a page reload.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use super::UserProfile;

/// Key holding the opaque session token
pub const TOKEN_KEY: &str = "authToken";
/// Key holding the JSON-encoded [`UserProfile`]
pub const USER_KEY: &str = "userData";

/// Errors raised by the underlying key-value mechanism
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store is missing or refused access
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A write was rejected (e.g. quota exceeded)
    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// A local, synchronous, string-keyed store.
///
/// Read failures are reported as absence; only writes can fail.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str);
}

/// In-memory [`KeyValueStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// A complete `(token, user)` pair read back from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub user: UserProfile,
}

/// Session persistence over a [`KeyValueStore`].
///
/// Sole owner of the [`TOKEN_KEY`] and [`USER_KEY`] entries.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Write both halves of the session.
    ///
    /// If the user record cannot be written the token is removed again, so
    /// storage never holds half a session written by us.
    pub fn save(&self, token: &str, user: &UserProfile) -> Result<(), StoreError> {
        let user_json = serde_json::to_string(user)?;

        self.backend.set(TOKEN_KEY, token)?;
        if let Err(e) = self.backend.set(USER_KEY, &user_json) {
            self.backend.remove(TOKEN_KEY);
            return Err(e);
        }

        tracing::debug!(email = %user.email, "Session persisted");
        Ok(())
    }

    /// Remove both halves of the session
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    /// Read the session back.
    ///
    /// Returns `None` unless both entries are present and the user record
    /// parses. A malformed record or a lone half is cleared before returning.
    pub fn load(&self) -> Option<StoredSession> {
        let token = self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user_json = self.backend.get(USER_KEY).filter(|u| !u.is_empty());

        match (token, user_json) {
            (Some(token), Some(user_json)) => {
                match serde_json::from_str::<UserProfile>(&user_json) {
                    Ok(user) => Some(StoredSession { token, user }),
                    Err(e) => {
                        tracing::warn!(error = %e, "Stored user data is corrupt, clearing session");
                        self.clear();
                        None
                    }
                }
            }
            (None, None) => None,
            _ => {
                tracing::debug!("Incomplete stored session, clearing");
                self.clear();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose writes to one key always fail
    struct RejectingStore {
        inner: MemoryStore,
        reject: &'static str,
    }

    impl KeyValueStore for RejectingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key == self.reject {
                return Err(StoreError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    fn store() -> (Rc<MemoryStore>, SessionStore) {
        let backend = Rc::new(MemoryStore::new());
        let store = SessionStore::new(backend.clone());
        (backend, store)
    }

    #[test]
    fn test_save_then_load() {
        let (backend, store) = store();
        let user = UserProfile::new("eve.holt@reqres.in");

        store.save("tok-1", &user).unwrap();

        assert_eq!(
            backend.get(USER_KEY).as_deref(),
            Some(r#"{"email":"eve.holt@reqres.in"}"#)
        );
        assert_eq!(
            store.load(),
            Some(StoredSession {
                token: "tok-1".to_string(),
                user,
            })
        );
    }

    #[test]
    fn test_load_from_fresh_handle() {
        let (backend, store) = store();
        store.save("tok-2", &UserProfile::new("a@b.co")).unwrap();

        let reopened = SessionStore::new(backend);
        assert_eq!(reopened.load().unwrap().user.email, "a@b.co");
    }

    #[test]
    fn test_load_empty() {
        let (_backend, store) = store();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_user_data_self_heals() {
        let (backend, store) = store();
        backend.set(TOKEN_KEY, "tok").unwrap();
        backend.set(USER_KEY, "not json {").unwrap();

        assert_eq!(store.load(), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_wrong_shape_user_data_is_corrupt() {
        let (backend, store) = store();
        backend.set(TOKEN_KEY, "tok").unwrap();
        backend.set(USER_KEY, r#"{"name":"eve"}"#).unwrap();

        assert_eq!(store.load(), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_partial_pair_is_absent() {
        let (backend, store) = store();
        backend.set(TOKEN_KEY, "tok").unwrap();

        assert_eq!(store.load(), None);
        assert!(backend.is_empty());

        backend.set(USER_KEY, r#"{"email":"a@b.co"}"#).unwrap();
        backend.set(TOKEN_KEY, "").unwrap();
        assert_eq!(store.load(), None);
        assert!(backend.is_empty());
    }

    #[test]
    fn test_clear_removes_both() {
        let (backend, store) = store();
        store.save("tok", &UserProfile::new("a@b.co")).unwrap();
        backend.set("unrelated", "kept").unwrap();

        store.clear();

        assert_eq!(backend.get(TOKEN_KEY), None);
        assert_eq!(backend.get(USER_KEY), None);
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_failed_user_write_rolls_back_token() {
        let backend = Rc::new(RejectingStore {
            inner: MemoryStore::new(),
            reject: USER_KEY,
        });
        let store = SessionStore::new(backend.clone());

        let err = store.save("tok", &UserProfile::new("a@b.co")).unwrap_err();

        assert!(matches!(err, StoreError::Write { .. }));
        assert!(backend.inner.is_empty());
    }
}
