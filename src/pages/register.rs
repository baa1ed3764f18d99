//! Account creation. A new account is never signed in automatically.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notice_tray::notify_error;
use crate::config::ClientConfig;
use crate::route::LOGIN_PATH;
use crate::state::notice::NoticeState;
use crate::util::forms::validate_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_registration(&username.get(), &password.get(), &confirm_password.get()) {
            Ok(credentials) => credentials,
            Err(err) => {
                notify_error(notices, err.to_string());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&config, &credentials).await {
                    Ok(_) => {
                        crate::components::notice_tray::notify_success(
                            notices,
                            "Registration successful! Please login.",
                        );
                        navigate(LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("registration failed: {err}");
                        notify_error(notices, err.user_message("Registration failed"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &navigate, credentials);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Login"</a>
                </p>
            </div>
        </div>
    }
}
