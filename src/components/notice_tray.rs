//! Top-right tray of dismissible notices.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and the route guard report action outcomes through [`push_notice`];
//! the tray renders whatever `NoticeState` holds.

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind, NoticeState};

/// Push a notice and schedule its auto-dismissal in the browser.
pub fn push_notice(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let mut id = 0;
    let mut timeout_ms = 0;
    notices.update(|n| {
        id = n.push(kind, text);
        timeout_ms = n.timeout_ms;
    });
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
        notices.update(|n| {
            n.dismiss(id);
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, timeout_ms);
    }
}

pub fn notify_success(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    push_notice(notices, NoticeKind::Success, text);
}

pub fn notify_info(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    push_notice(notices, NoticeKind::Info, text);
}

pub fn notify_error(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    push_notice(notices, NoticeKind::Error, text);
}

#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|Notice { id, kind, text }| {
                        view! {
                            <div class=kind.css_class() role="status">
                                <span class="notice__text">{text}</span>
                                <button
                                    class="notice__close"
                                    title="Dismiss"
                                    on:click=move |_| {
                                        notices.update(|n| {
                                            n.dismiss(id);
                                        });
                                    }
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
