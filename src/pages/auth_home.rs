use leptos::prelude::*;

use crate::route::{LOGIN_PATH, REGISTER_PATH};

/// Unauthenticated entry page.
#[component]
pub fn AuthHomePage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Car Management System"</h1>
                <p class="auth-card__subtitle">
                    "Browse the inventory, reserve a car, or manage the catalog."
                </p>
                <div class="auth-card__actions">
                    <a class="btn btn--primary" href=LOGIN_PATH>"Login"</a>
                    <a class="btn" href=REGISTER_PATH>"Register"</a>
                </div>
            </div>
        </div>
    }
}
