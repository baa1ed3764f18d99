//! Route guard: maps a requested route and the session to a rendering decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is mounted behind `components::guard::Guarded`, which calls
//! [`evaluate`] for the route it wraps on every session change. Keeping the
//! decision a pure function makes the access rules testable without a DOM.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::route::{ADMIN_PATH, AUTH_PATH, Access, AppRoute, CARS_PATH, ROOT_PATH};
use crate::state::session::SessionState;

pub const ADMIN_REQUIRED_NOTICE: &str = "Admin access required";

/// Outcome of guarding one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session validation in flight; show the neutral placeholder.
    Loading,
    /// Render the requested view.
    Render,
    /// Replace the current location, optionally raising an error notice.
    Redirect { to: &'static str, notice: Option<&'static str> },
}

impl RouteDecision {
    const fn redirect(to: &'static str) -> Self {
        Self::Redirect { to, notice: None }
    }
}

/// Where a session belongs by default: `/auth` when signed out, `/admin`
/// for admins, `/cars` for everyone else.
pub fn landing_path(state: SessionState) -> &'static str {
    if !state.authenticated() {
        AUTH_PATH
    } else if state.is_admin() {
        ADMIN_PATH
    } else {
        CARS_PATH
    }
}

/// Decide what to do with `route` under `state`.
///
/// Loading always wins, so a stale session is never acted on while a
/// validation is in flight.
pub fn evaluate(route: AppRoute, state: SessionState) -> RouteDecision {
    if state.loading() {
        return RouteDecision::Loading;
    }
    if route == AppRoute::NotFound {
        return RouteDecision::redirect(ROOT_PATH);
    }
    match route.access() {
        Access::Authenticated | Access::Admin if !state.authenticated() => RouteDecision::redirect(AUTH_PATH),
        Access::Admin if !state.is_admin() => {
            RouteDecision::Redirect { to: CARS_PATH, notice: Some(ADMIN_REQUIRED_NOTICE) }
        }
        Access::GuestOnly if state.authenticated() => RouteDecision::redirect(landing_path(state)),
        Access::RedirectOnly => RouteDecision::redirect(landing_path(state)),
        Access::GuestOnly | Access::Authenticated | Access::Admin => RouteDecision::Render,
    }
}
