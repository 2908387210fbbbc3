//! Session context: the single credential token and its lifecycle.
//!
//! A [`Session`] is owned by the application state and handed to whatever
//! issues authenticated calls; nothing looks the token up globally. Holding a
//! token is the whole definition of "authenticated": no expiry or validity
//! check happens client-side.

mod store;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

pub use store::TokenStore;

/// Opaque bearer credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Bearer(String);

impl Bearer {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Bearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bearer(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No token has been seen in this run.
    Unset,
    Set(Bearer),
    /// Logged out during this run.
    Cleared,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to read token from {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write token to {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove token at {}: {}", .path.display(), .source)]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct Session {
    state: SessionState,
    store: TokenStore,
}

impl Session {
    /// Start from whatever token the store holds.
    pub fn restore(store: TokenStore) -> Result<Self, SessionError> {
        let state = match store.load()? {
            Some(token) => {
                info!(path = %store.path().display(), "Restored stored session token");
                SessionState::Set(Bearer::new(token))
            }
            None => SessionState::Unset,
        };
        Ok(Self { state, store })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Set(_))
    }

    pub fn bearer(&self) -> Option<&Bearer> {
        match &self.state {
            SessionState::Set(bearer) => Some(bearer),
            _ => None,
        }
    }

    /// Persist `token` and mark the session authenticated. On a write failure
    /// the session is left as it was.
    pub fn establish(&mut self, token: String) -> Result<(), SessionError> {
        self.store.save(&token)?;
        self.state = SessionState::Set(Bearer::new(token));
        Ok(())
    }

    /// Forget the token. The in-memory session is cleared even if removing
    /// the file fails.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.state = SessionState::Cleared;
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TokenStore {
        TokenStore::new(dir.path().join("nested").join("token"))
    }

    #[test]
    fn restore_without_file_is_unset() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::restore(store_in(&dir)).unwrap();
        assert_eq!(session.state(), &SessionState::Unset);
        assert!(!session.is_authenticated());
        assert!(session.bearer().is_none());
    }

    #[test]
    fn establish_persists_and_restore_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::restore(store_in(&dir)).unwrap();
        session.establish("T1".to_string()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().map(Bearer::as_str), Some("T1"));

        let restored = Session::restore(store_in(&dir)).unwrap();
        assert_eq!(restored.state(), &SessionState::Set(Bearer::new("T1")));
    }

    #[test]
    fn clear_removes_file_and_flips_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut session = Session::restore(store.clone()).unwrap();
        session.establish("T1".to_string()).unwrap();
        assert!(store.path().exists());

        session.clear().unwrap();
        assert_eq!(session.state(), &SessionState::Cleared);
        assert!(!store.path().exists());

        // Clearing twice is fine.
        session.clear().unwrap();
    }

    #[test]
    fn whitespace_only_file_counts_as_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "  \n").unwrap();
        let session = Session::restore(store).unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn token_round_trips_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(" T1 ").unwrap();
        assert_eq!(std::fs::read(store.path()).unwrap(), b" T1 ");
        assert_eq!(store.load().unwrap().as_deref(), Some(" T1 "));

        // A shorter token fully replaces the previous one.
        store.save("T").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("T"));

        std::fs::write(store.path(), "T1\r\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("T1"));
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save("T1").unwrap();
        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);

        std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();
        store.save("T2").unwrap();
        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn bearer_debug_is_redacted() {
        let bearer = Bearer::new("super-secret");
        assert_eq!(format!("{bearer:?}"), "Bearer(<redacted>)");
    }
}
