//! Admin add/edit screens sharing one form.
//!
//! Both flows validate through `CarDraft::validate` before any request and
//! return to the admin dashboard on success. Edit sends every field.
//!
//! Request completion sets a `saved` flag; an effect owned by the page does
//! the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::notice_tray::notify_error;
use crate::config::ClientConfig;
use crate::net::types::NewCar;
use crate::pages::inventory::SIGN_IN_REQUIRED;
use crate::route::{ADMIN_PATH, parse_car_id};
use crate::state::notice::NoticeState;
use crate::state::session::BrowserSession;
use crate::util::forms::{CarDraft, MAX_YEAR, MIN_YEAR};

#[component]
pub fn AddCarPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<BrowserSession>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let draft = RwSignal::new(CarDraft::default());
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    return_to_dashboard_when(saved, navigate);

    let on_submit = Callback::new(move |car: NewCar| {
        let Some(token) = session.credential() else {
            notify_error(notices, SIGN_IN_REQUIRED);
            return;
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_car(&config, &token, &car).await {
                    Ok(created) => {
                        log::info!("created car {}", created.id);
                        crate::components::notice_tray::notify_success(notices, "Car added successfully");
                        saved.set(true);
                    }
                    Err(err) => {
                        log::warn!("creating car failed: {err}");
                        notify_error(notices, err.user_message("Failed to add car"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, token, car, saved);
            busy.set(false);
        }
    });

    view! { <CarForm title="Add New Car" submit_label="Add Car" draft=draft busy=busy on_submit=on_submit/> }
}

#[component]
pub fn EditCarPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<BrowserSession>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let draft = RwSignal::new(CarDraft::default());
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    return_to_dashboard_when(saved, navigate);
    // None while the prefill request is pending, Some(false) when it failed.
    let prefilled = RwSignal::new(None::<bool>);

    let car_id = move || params.read().get("id").as_deref().and_then(parse_car_id);

    let fetch_config = config.clone();
    Effect::new(move || {
        let Some(id) = car_id() else {
            prefilled.set(Some(false));
            return;
        };
        prefilled.set(None);
        #[cfg(feature = "csr")]
        {
            let config = fetch_config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_car(&config, id).await {
                    Ok(car) => {
                        draft.set(CarDraft::from_car(&car));
                        prefilled.set(Some(true));
                    }
                    Err(err) => {
                        log::warn!("fetching car {id} for edit failed: {err}");
                        notify_error(notices, err.user_message("Failed to fetch car details"));
                        prefilled.set(Some(false));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&fetch_config, id);
    });

    let on_submit = Callback::new(move |car: NewCar| {
        let Some(id) = car_id() else {
            return;
        };
        let Some(token) = session.credential() else {
            notify_error(notices, SIGN_IN_REQUIRED);
            return;
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let update = crate::net::types::CarUpdate::from(car);
                match crate::net::api::update_car(&config, &token, id, &update).await {
                    Ok(_) => {
                        crate::components::notice_tray::notify_success(notices, "Car updated successfully");
                        saved.set(true);
                    }
                    Err(err) => {
                        log::warn!("updating car {id} failed: {err}");
                        notify_error(notices, err.user_message("Failed to update car"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, token, id, car, saved);
            busy.set(false);
        }
    });

    move || match prefilled.get() {
        None => view! { <p class="page__loading">"Loading car details..."</p> }.into_any(),
        Some(false) => view! { <p class="car-details__missing">"Car not found."</p> }.into_any(),
        Some(true) => {
            view! { <CarForm title="Edit Car" submit_label="Update Car" draft=draft busy=busy on_submit=on_submit/> }
                .into_any()
        }
    }
}

fn return_to_dashboard_when(saved: RwSignal<bool>, navigate: impl Fn(&str, NavigateOptions) + 'static) {
    Effect::new(move || {
        if saved.get() {
            saved.set(false);
            navigate(ADMIN_PATH, NavigateOptions::default());
        }
    });
}

/// Field set shared by add and edit. Submits only a validated car.
#[component]
fn CarForm(
    title: &'static str,
    submit_label: &'static str,
    draft: RwSignal<CarDraft>,
    busy: RwSignal<bool>,
    on_submit: Callback<NewCar>,
) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match draft.get().validate() {
            Ok(car) => on_submit.run(car),
            Err(err) => notify_error(notices, err.to_string()),
        }
    };

    view! {
        <div class="page car-form">
            <h1 class="page__title">{title}</h1>
            <form class="car-form__form" on:submit=submit>
                <label class="car-form__label">
                    "Make"
                    <input
                        class="car-form__input"
                        type="text"
                        prop:value=move || draft.get().make
                        on:input=move |ev| draft.update(|d| d.make = event_target_value(&ev))
                    />
                </label>
                <label class="car-form__label">
                    "Model"
                    <input
                        class="car-form__input"
                        type="text"
                        prop:value=move || draft.get().model
                        on:input=move |ev| draft.update(|d| d.model = event_target_value(&ev))
                    />
                </label>
                <label class="car-form__label">
                    "Year"
                    <input
                        class="car-form__input"
                        type="number"
                        min=MIN_YEAR.to_string()
                        max=MAX_YEAR.to_string()
                        prop:value=move || draft.get().year
                        on:input=move |ev| draft.update(|d| d.year = event_target_value(&ev))
                    />
                </label>
                <label class="car-form__label">
                    "Color"
                    <input
                        class="car-form__input"
                        type="text"
                        prop:value=move || draft.get().color
                        on:input=move |ev| draft.update(|d| d.color = event_target_value(&ev))
                    />
                </label>
                <label class="car-form__label">
                    "Price ($)"
                    <input
                        class="car-form__input"
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || draft.get().price
                        on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                    />
                </label>
                <label class="car-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().available
                        on:change=move |ev| draft.update(|d| d.available = event_target_checked(&ev))
                    />
                    "Available for reservation"
                </label>
                <div class="car-form__actions">
                    <a class="btn" href=ADMIN_PATH>"Cancel"</a>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </form>
        </div>
    }
}
