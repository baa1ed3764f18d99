//! Top navigation bar with role-aware links and logout.

use leptos::prelude::*;

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::components::notice_tray::notify_info;
use crate::route::{ADD_CAR_PATH, ADMIN_PATH, CARS_PATH, LOGIN_PATH, REGISTER_PATH, ROOT_PATH};
use crate::state::notice::NoticeState;
use crate::state::session::{BrowserSession, SessionState};
use crate::util::auth::landing_path;

/// Which link groups the bar shows for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Validation in flight: brand only.
    Pending,
    Guest,
    Member { admin: bool },
}

impl NavMode {
    pub fn for_session(state: SessionState) -> Self {
        if state.loading() {
            Self::Pending
        } else if state.authenticated() {
            Self::Member { admin: state.is_admin() }
        } else {
            Self::Guest
        }
    }
}

/// Brand link target; the root while the session is still unknown.
pub fn brand_href(state: SessionState) -> &'static str {
    if state.loading() { ROOT_PATH } else { landing_path(state) }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let session = expect_context::<BrowserSession>();

    let on_logout = Callback::new(move |()| {
        notify_info(notices, "Logged out successfully");
        session.logout();
    });

    let mode = move || NavMode::for_session(session_state.get());
    let authenticated = move || matches!(mode(), NavMode::Member { .. });
    let is_admin = move || mode() == NavMode::Member { admin: true };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href=move || brand_href(session_state.get())>
                    "Car Management System"
                </a>
                <div class="navbar__links">
                    <Show when=is_admin>
                        <a class="navbar__link" href=ADMIN_PATH>"Admin Dashboard"</a>
                    </Show>
                    <Show when=authenticated>
                        <a class="navbar__link" href=CARS_PATH>"Car Listings"</a>
                    </Show>
                    <Show when=is_admin>
                        <a class="navbar__link" href=ADD_CAR_PATH>"Add Car"</a>
                    </Show>
                </div>
                <div class="navbar__session">
                    <Show when=move || mode() == NavMode::Guest>
                        <a class="navbar__link" href=LOGIN_PATH>"Login"</a>
                        <a class="navbar__link" href=REGISTER_PATH>"Register"</a>
                    </Show>
                    <Show when=authenticated>
                        <span
                            class="navbar__badge"
                            class:navbar__badge--admin=is_admin
                        >
                            {move || if is_admin() { "Admin User" } else { "Regular User" }}
                        </span>
                        <button class="navbar__logout" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
