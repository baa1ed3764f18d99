//! Route gate wrapping every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each `Route` declares the `AppRoute` it mounts. The gate re-evaluates
//! `util::auth::evaluate` for that route whenever the session signal changes
//! and performs the redirect the decision asks for. The live location is
//! never consulted.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::notice_tray::notify_error;
use crate::route::{AppRoute, CarId};
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::util::auth::{RouteDecision, evaluate};

/// Render `children` only when the session satisfies `route`.
#[component]
pub fn Guarded(#[prop(into)] route: Signal<AppRoute>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| evaluate(route.get(), session.get()));

    Effect::new(move || {
        if let RouteDecision::Redirect { to, notice } = decision.get() {
            if let Some(text) = notice {
                notify_error(notices, text);
            }
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        RouteDecision::Loading => view! { <LoadingPlaceholder/> }.into_any(),
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect { .. } => view! { <Redirecting/> }.into_any(),
    }
}

/// Route for a `/cars/...:id` path, read from the matched `id` parameter.
pub fn use_car_route(route: fn(CarId) -> AppRoute) -> Signal<AppRoute> {
    let params = use_params_map();
    Signal::derive(move || AppRoute::with_car_id(params.read().get("id").as_deref(), route))
}

/// Neutral placeholder shown while the stored credential is validated.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="route-loading" role="status">
            <span class="route-loading__spinner" aria-hidden="true"></span>
            <p>"Loading application..."</p>
        </div>
    }
}

#[component]
pub fn Redirecting() -> impl IntoView {
    view! { <p class="route-redirect">"Redirecting..."</p> }
}
