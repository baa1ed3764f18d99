//! Authentication session for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single owner of the session snapshot and the only
//! reader/writer of the persisted credential. The route guard and the navbar
//! observe it through subscriptions bridged into a Leptos signal by `app`.
//!
//! DESIGN
//! ======
//! Every mutation is a whole-state transition made under one lock, and each
//! transition advances an epoch. A validation round-trip carries the epoch it
//! started in; a result arriving after a newer login/logout/validation is
//! dropped instead of applied.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::api::ApiError;
use crate::net::types::CurrentUser;
use crate::route::AUTH_PATH;
use crate::util::credentials::{CredentialStore, LocalStorageCredentials};

/// Authentication snapshot.
///
/// Fields are private: the only constructors are the three named states, so
/// `is_admin` can never be set without `authenticated`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    authenticated: bool,
    is_admin: bool,
    loading: bool,
}

impl SessionState {
    /// Validation in flight; nothing is known yet.
    pub const fn starting() -> Self {
        Self { authenticated: false, is_admin: false, loading: true }
    }

    pub const fn signed_out() -> Self {
        Self { authenticated: false, is_admin: false, loading: false }
    }

    pub const fn signed_in(is_admin: bool) -> Self {
        Self { authenticated: true, is_admin, loading: false }
    }

    pub const fn authenticated(self) -> bool {
        self.authenticated
    }

    pub const fn is_admin(self) -> bool {
        self.authenticated && self.is_admin
    }

    pub const fn loading(self) -> bool {
        self.loading
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::starting()
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Proof that a validation was started, tagged with its epoch.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidationTicket {
    epoch: u64,
    token: String,
}

impl ValidationTicket {
    pub fn token(&self) -> &str {
        &self.token
    }
}

type Subscriber = Arc<dyn Fn(SessionState) + Send + Sync>;
type ResetHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Session store backed by browser `localStorage`.
pub type BrowserSession = SessionStore<LocalStorageCredentials>;

struct Shared {
    state: SessionState,
    epoch: u64,
    initialized: bool,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

struct Inner<C> {
    credentials: C,
    reset: ResetHandler,
    shared: Mutex<Shared>,
}

/// Shared handle to the session. Clones refer to the same session.
pub struct SessionStore<C: CredentialStore> {
    inner: Arc<Inner<C>>,
}

impl<C: CredentialStore> Clone for SessionStore<C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<C: CredentialStore> SessionStore<C> {
    /// Create a store in the starting state.
    ///
    /// `reset` performs the full navigation reset after logout; it receives
    /// the unauthenticated entry path.
    pub fn new(credentials: C, reset: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                credentials,
                reset: Box::new(reset),
                shared: Mutex::new(Shared {
                    state: SessionState::starting(),
                    epoch: 0,
                    initialized: false,
                    next_subscription: 0,
                    subscribers: Vec::new(),
                }),
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.lock().state
    }

    /// Bearer token for authorized API calls, only while signed in.
    pub fn credential(&self) -> Option<String> {
        if self.state().authenticated() { self.inner.credentials.load() } else { None }
    }

    /// Register a callback invoked with every new state after a transition.
    pub fn subscribe(&self, callback: impl Fn(SessionState) + Send + Sync + 'static) -> SubscriptionId {
        let mut shared = self.lock();
        let id = SubscriptionId(shared.next_subscription);
        shared.next_subscription += 1;
        shared.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut shared = self.lock();
        let before = shared.subscribers.len();
        shared.subscribers.retain(|(sid, _)| *sid != id);
        shared.subscribers.len() != before
    }

    /// Validate the persisted credential once at start-up.
    ///
    /// `validate` performs the `GET /api/user` round-trip for a token. Later
    /// calls are ignored; use [`SessionStore::revalidate`] instead.
    pub async fn initialize<F, Fut>(&self, validate: F) -> SessionState
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<CurrentUser, ApiError>>,
    {
        {
            let mut shared = self.lock();
            if shared.initialized {
                log::warn!("session already initialized; ignoring repeated initialize");
                return shared.state;
            }
            shared.initialized = true;
        }
        self.revalidate(validate).await
    }

    /// Re-check the persisted credential against the API.
    pub async fn revalidate<F, Fut>(&self, validate: F) -> SessionState
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<CurrentUser, ApiError>>,
    {
        let Some(ticket) = self.begin_validation() else {
            return self.state();
        };
        let outcome = validate(ticket.token().to_owned()).await;
        self.finish_validation(ticket, outcome);
        self.state()
    }

    /// Enter the loading state and hand out a ticket for the stored token.
    ///
    /// Without a stored token the session goes straight to signed out and
    /// no ticket is issued, so the API is never contacted.
    pub fn begin_validation(&self) -> Option<ValidationTicket> {
        let token = self.inner.credentials.load();
        let (ticket, next, subscribers) = {
            let mut shared = self.lock();
            shared.epoch += 1;
            let (ticket, next) = match token {
                Some(token) => (Some(ValidationTicket { epoch: shared.epoch, token }), SessionState::starting()),
                None => {
                    log::debug!("no stored credential; session starts signed out");
                    (None, SessionState::signed_out())
                }
            };
            shared.state = next;
            (ticket, next, shared.listeners())
        };
        notify(&subscribers, next);
        ticket
    }

    /// Apply a validation outcome. Returns `false` when the ticket is stale.
    ///
    /// Rejections and transport failures are handled alike: the credential
    /// is deleted and the session is signed out.
    pub fn finish_validation(&self, ticket: ValidationTicket, outcome: Result<CurrentUser, ApiError>) -> bool {
        let (next, subscribers) = {
            let mut shared = self.lock();
            if ticket.epoch != shared.epoch {
                log::debug!("discarding stale validation (epoch {} superseded by {})", ticket.epoch, shared.epoch);
                return false;
            }
            let next = match outcome {
                Ok(user) => {
                    log::info!("stored credential accepted (admin: {})", user.is_admin);
                    SessionState::signed_in(user.is_admin)
                }
                Err(err) => {
                    log::warn!("stored credential rejected, clearing: {err}");
                    self.inner.credentials.clear();
                    SessionState::signed_out()
                }
            };
            shared.state = next;
            (next, shared.listeners())
        };
        notify(&subscribers, next);
        true
    }

    /// Record a fresh login. Any previous credential is replaced.
    pub fn login(&self, token: &str, is_admin: bool) {
        self.inner.credentials.save(token);
        let next = SessionState::signed_in(is_admin);
        let subscribers = {
            let mut shared = self.lock();
            shared.epoch += 1;
            shared.state = next;
            shared.listeners()
        };
        log::info!("signed in (admin: {is_admin})");
        notify(&subscribers, next);
    }

    /// Sign out, drop the credential and hard-reset navigation to `/auth`.
    pub fn logout(&self) {
        self.inner.credentials.clear();
        let next = SessionState::signed_out();
        let subscribers = {
            let mut shared = self.lock();
            shared.epoch += 1;
            shared.state = next;
            shared.listeners()
        };
        log::info!("signed out");
        notify(&subscribers, next);
        (self.inner.reset)(AUTH_PATH);
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.inner.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn credentials(&self) -> &C {
        &self.inner.credentials
    }
}

impl Shared {
    fn listeners(&self) -> Vec<Subscriber> {
        self.subscribers.iter().map(|(_, s)| Arc::clone(s)).collect()
    }
}

// Runs outside the lock so callbacks may read the store.
fn notify(subscribers: &[Subscriber], state: SessionState) {
    for subscriber in subscribers {
        subscriber(state);
    }
}
