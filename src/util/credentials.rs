//! Persistence for the bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential is the only client-side persisted artifact. `SessionStore`
//! is its sole reader and writer; the trait lets tests substitute an
//! in-memory backend for browser `localStorage`.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::{Mutex, PoisonError};

/// Storage backend for a single opaque token string.
pub trait CredentialStore: Send + Sync + 'static {
    fn load(&self) -> Option<String>;
    /// Replace any stored token.
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Browser `localStorage` under a single well-known key.
///
/// Outside the browser build every operation is a no-op and `load` returns
/// `None`, which the session treats as signed out.
#[derive(Clone, Debug)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for LocalStorageCredentials {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(&self.key).ok().flatten()?;
            if raw.is_empty() { None } else { Some(raw) }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("failed to persist credential under {}", self.key);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// Process-local credential slot, used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    token: Mutex<Option<String>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl CredentialStore for MemoryCredentials {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
