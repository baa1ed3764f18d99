//! Catalog listing with free-text search and an availability filter.

use leptos::prelude::*;

use crate::components::car_card::CarCard;
use crate::config::ClientConfig;
use crate::pages::inventory::{delete_car, load_cars};
use crate::route::CarId;
use crate::state::cars::{AvailabilityFilter, CarsState};
use crate::state::notice::NoticeState;
use crate::state::session::{BrowserSession, SessionState};

#[component]
pub fn CarListPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<BrowserSession>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let cars = RwSignal::new(CarsState::default());

    load_cars(config.clone(), cars, notices);

    let on_delete = Callback::new(move |id: CarId| delete_car(config.clone(), session.clone(), cars, notices, id));
    let is_admin = move || session_state.get().is_admin();

    view! {
        <div class="page car-list">
            <h1 class="page__title">"Car Listings"</h1>
            <div class="car-list__controls">
                <input
                    class="car-list__search"
                    type="search"
                    placeholder="Search by make, model, year or color"
                    prop:value=move || cars.get().search
                    on:input=move |ev| cars.update(|c| c.search = event_target_value(&ev))
                />
                <select
                    class="car-list__filter"
                    prop:value=move || cars.get().filter.value()
                    on:change=move |ev| {
                        let filter = AvailabilityFilter::from_value(&event_target_value(&ev));
                        cars.update(|c| c.filter = filter);
                    }
                >
                    <option value="all">"All Cars"</option>
                    <option value="available">"Available Only"</option>
                    <option value="unavailable">"Unavailable Only"</option>
                </select>
            </div>
            <Show
                when=move || !cars.get().loading
                fallback=|| view! { <p class="page__loading">"Loading cars..."</p> }
            >
                {move || {
                    let visible = cars.get().visible();
                    if visible.is_empty() {
                        return view! { <p class="car-list__empty">"No cars found."</p> }.into_any();
                    }
                    let admin = is_admin();
                    view! {
                        <div class="car-list__grid">
                            {visible
                                .into_iter()
                                .map(|car| view! { <CarCard car=car admin=admin on_delete=on_delete/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}
