//! Single car view with the regular-user reserve action.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::car_card::AvailabilityBadge;
use crate::components::notice_tray::notify_error;
use crate::config::ClientConfig;
use crate::net::types::Car;
use crate::route::{CARS_PATH, CarId, edit_car_path, parse_car_id};
use crate::state::notice::NoticeState;
use crate::state::session::{BrowserSession, SessionState};
use crate::util::format::format_price;

/// Fetch state of the details page.
#[derive(Clone, Debug, PartialEq)]
pub enum CarLookup {
    Loading,
    Found(Car),
    Missing,
}

/// The reserve action is offered to signed-in regular users on available cars.
pub fn can_reserve(state: SessionState, car: &Car) -> bool {
    state.authenticated() && !state.is_admin() && car.available
}

#[component]
pub fn CarDetailsPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<BrowserSession>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let params = use_params_map();
    let lookup = RwSignal::new(CarLookup::Loading);
    let reserving = RwSignal::new(false);

    let fetch_config = config.clone();
    Effect::new(move || {
        let Some(id) = params.read().get("id").as_deref().and_then(parse_car_id) else {
            lookup.set(CarLookup::Missing);
            return;
        };
        lookup.set(CarLookup::Loading);
        #[cfg(feature = "csr")]
        {
            let config = fetch_config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_car(&config, id).await {
                    Ok(car) => lookup.set(CarLookup::Found(car)),
                    Err(err) => {
                        if err.is_not_found() {
                            log::debug!("car {id} does not exist");
                        } else {
                            log::warn!("fetching car {id} failed: {err}");
                        }
                        notify_error(notices, err.user_message("Failed to fetch car details"));
                        lookup.set(CarLookup::Missing);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (&fetch_config, id);
    });

    let on_reserve = Callback::new(move |id: CarId| {
        if reserving.get_untracked() {
            return;
        }
        let Some(token) = session.credential() else {
            notify_error(notices, "Please login to reserve a car");
            return;
        };
        reserving.set(true);
        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::reserve_car(&config, &token, id).await {
                    Ok(_) => {
                        lookup.update(|l| {
                            if let CarLookup::Found(car) = l {
                                car.available = false;
                            }
                        });
                        crate::components::notice_tray::notify_success(notices, "Car reserved successfully!");
                    }
                    Err(err) => {
                        log::warn!("reserving car {id} failed: {err}");
                        notify_error(notices, err.user_message("Failed to reserve car"));
                    }
                }
                reserving.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, token, id);
            reserving.set(false);
        }
    });

    view! {
        <div class="page car-details">
            <a class="car-details__back" href=CARS_PATH>"← Back to Listings"</a>
            {move || match lookup.get() {
                CarLookup::Loading => view! { <p class="page__loading">"Loading car details..."</p> }.into_any(),
                CarLookup::Missing => view! { <p class="car-details__missing">"Car not found."</p> }.into_any(),
                CarLookup::Found(car) => {
                    let state = session_state.get();
                    let id = car.id;
                    let reservable = can_reserve(state, &car);
                    view! {
                        <div class="car-details__card">
                            <h1 class="car-details__title">{format!("{} {}", car.make, car.model)}</h1>
                            <dl class="car-details__facts">
                                <dt>"Year"</dt>
                                <dd>{car.year}</dd>
                                <dt>"Color"</dt>
                                <dd>{car.color}</dd>
                                <dt>"Price"</dt>
                                <dd>{format_price(car.price)}</dd>
                                <dt>"Status"</dt>
                                <dd>
                                    <AvailabilityBadge available=car.available/>
                                </dd>
                            </dl>
                            <div class="car-details__actions">
                                <Show when=move || reservable>
                                    <button
                                        class="btn btn--success"
                                        disabled=move || reserving.get()
                                        on:click=move |_| on_reserve.run(id)
                                    >
                                        {move || if reserving.get() { "Reserving..." } else { "Reserve Now" }}
                                    </button>
                                </Show>
                                <Show when=move || state.is_admin()>
                                    <a class="btn btn--warning" href=edit_car_path(id)>"Edit Car"</a>
                                </Show>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
#[path = "car_details_test.rs"]
mod car_details_test;
