use leptos::prelude::*;

use super::storage::{self, StoredSession};

/// Client-side session shared with the whole component tree
#[derive(Clone, Copy)]
pub struct SessionStore {
    pub logged_in: RwSignal<bool>,
    pub username: RwSignal<Option<String>>,
    /// Mirror changes into localStorage
    persistent: bool,
}

impl SessionStore {
    /// Session restored from localStorage and kept in sync with it
    pub fn new() -> Self {
        Self {
            persistent: true,
            ..Self::from_stored(storage::load_session().unwrap_or_default())
        }
    }

    /// In-memory session seeded from a snapshot
    pub fn from_stored(stored: StoredSession) -> Self {
        Self {
            logged_in: RwSignal::new(stored.logged_in),
            username: RwSignal::new(stored.username),
            persistent: false,
        }
    }

    pub fn log_in(&self, username: String) {
        log::info!("session: logged in as '{}'", username);
        self.username.set(Some(username));
        self.logged_in.set(true);
        self.persist();
    }

    pub fn log_out(&self) {
        log::info!("session: logged out");
        self.logged_in.set(false);
        self.username.set(None);
        if self.persistent {
            storage::clear_session();
        }
    }

    pub fn snapshot(&self) -> StoredSession {
        StoredSession {
            logged_in: self.logged_in.get_untracked(),
            username: self.username.get_untracked(),
        }
    }

    fn persist(&self) {
        if !self.persistent {
            return;
        }
        if let Err(e) = storage::save_session(&self.snapshot()) {
            log::warn!("session: could not persist: {}", e);
        }
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionStore::new());

    children()
}

/// Hook to access the session store
pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restores_snapshot() {
        let owner = Owner::new();
        owner.with(|| {
            let session = SessionStore::from_stored(StoredSession {
                logged_in: true,
                username: Some("ada".to_string()),
            });
            assert!(session.logged_in.get_untracked());
            assert_eq!(session.username.get_untracked().as_deref(), Some("ada"));
        });
    }

    #[test]
    fn test_log_in_then_log_out() {
        let owner = Owner::new();
        owner.with(|| {
            let session = SessionStore::from_stored(StoredSession::default());
            assert_eq!(session.snapshot(), StoredSession::default());

            session.log_in("ada".to_string());
            assert_eq!(
                session.snapshot(),
                StoredSession {
                    logged_in: true,
                    username: Some("ada".to_string()),
                }
            );

            session.log_out();
            assert!(!session.logged_in.get_untracked());
            assert_eq!(session.username.get_untracked(), None);
        });
    }

    #[test]
    fn test_use_session_reads_context() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(SessionStore::from_stored(StoredSession::default()));
            use_session().log_in("grace".to_string());
            assert!(use_session().logged_in.get_untracked());
        });
    }
}
