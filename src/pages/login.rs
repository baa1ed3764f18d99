//! Username/password sign-in.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notice_tray::notify_error;
use crate::config::ClientConfig;
use crate::route::REGISTER_PATH;
use crate::state::notice::NoticeState;
use crate::state::session::BrowserSession;
use crate::util::forms::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<BrowserSession>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login(&username.get(), &password.get()) {
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
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &credentials).await {
                    Ok(response) => {
                        session.login(&response.access_token, response.is_admin);
                        crate::components::notice_tray::notify_success(notices, "Login successful!");
                        let landing = crate::util::auth::landing_path(session.state());
                        navigate(landing, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        notify_error(notices, err.user_message("Login failed"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &session, &navigate, credentials);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
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
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
