//! Bearer-token session.
//!
//! The token itself is issued by the login flow; this module only loads it
//! from persistent storage, exposes it to the API client and ends the
//! session when the server answers 401.

use leptos::prelude::*;
use std::sync::Arc;

pub const TOKEN_STORAGE_KEY: &str = "token";
pub const LOGIN_PATH: &str = "/login";

pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn clear(&self);
}

/// `window.localStorage`
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()
            .and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
            .filter(|t| !t.trim().is_empty())
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    store: StoredValue<Arc<dyn TokenStore>>,
}

impl Session {
    pub fn start(store: Arc<dyn TokenStore>) -> Self {
        let token = store.load();
        if token.is_some() {
            log::info!("session restored from storage");
        } else {
            log::info!("no stored session token");
        }
        Self {
            token: RwSignal::new(token),
            store: StoredValue::new(store),
        }
    }

    pub fn start_in_browser() -> Self {
        Self::start(Arc::new(BrowserTokenStore))
    }

    /// `Authorization` header value, if signed in.
    pub fn bearer(&self) -> Option<String> {
        self.token
            .with_untracked(|t| t.as_ref().map(|t| format!("Bearer {}", t)))
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn is_signed_in_untracked(&self) -> bool {
        self.token.with_untracked(Option::is_some)
    }

    pub fn end(&self) {
        self.store.with_value(|store| store.clear());
        self.token.set(None);
        log::info!("session ended");
    }

    /// Ends the session and sends the browser to the login page unless it
    /// is already there.
    pub fn end_and_redirect(&self) {
        self.end();
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let on_login = location
            .pathname()
            .map(|p| p.starts_with(LOGIN_PATH))
            .unwrap_or(false);
        if !on_login {
            let _ = location.set_href(LOGIN_PATH);
        }
    }
}

pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MemoryTokenStore(Mutex<Option<String>>);

    impl TokenStore for MemoryTokenStore {
        fn load(&self) -> Option<String> {
            self.0.lock().unwrap().clone()
        }

        fn clear(&self) {
            *self.0.lock().unwrap() = None;
        }
    }

    #[test]
    fn test_bearer_header_from_stored_token() {
        let session = Session::start(Arc::new(MemoryTokenStore(Mutex::new(Some("abc".into())))));
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc"));
        assert!(session.is_signed_in_untracked());
    }

    #[test]
    fn test_end_clears_store() {
        let store = Arc::new(MemoryTokenStore(Mutex::new(Some("abc".into()))));
        let session = Session::start(store.clone());
        session.end();
        assert!(session.bearer().is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_no_token() {
        let session = Session::start(Arc::new(MemoryTokenStore(Mutex::new(None))));
        assert!(!session.is_signed_in_untracked());
    }
}
