//! Admin landing: inventory counts and a management table.

use leptos::prelude::*;

use crate::components::car_card::AvailabilityBadge;
use crate::config::ClientConfig;
use crate::pages::inventory::{delete_car, load_cars};
use crate::route::{ADD_CAR_PATH, CarId, car_details_path, edit_car_path};
use crate::state::cars::CarsState;
use crate::state::notice::NoticeState;
use crate::state::session::BrowserSession;
use crate::util::format::format_price;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<BrowserSession>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let cars = RwSignal::new(CarsState::default());

    load_cars(config.clone(), cars, notices);

    let on_delete = Callback::new(move |id: CarId| delete_car(config.clone(), session.clone(), cars, notices, id));
    let stats = move || cars.get().stats();

    view! {
        <div class="page admin-dashboard">
            <header class="admin-dashboard__header">
                <h1 class="page__title">"Admin Dashboard"</h1>
                <a class="btn btn--primary" href=ADD_CAR_PATH>"Add New Car"</a>
            </header>
            <div class="admin-dashboard__stats">
                <StatCard label="Total Cars" value=Signal::derive(move || stats().total)/>
                <StatCard label="Available" value=Signal::derive(move || stats().available)/>
                <StatCard label="Reserved" value=Signal::derive(move || stats().unavailable)/>
            </div>
            <Show
                when=move || !cars.get().loading
                fallback=|| view! { <p class="page__loading">"Loading inventory..."</p> }
            >
                {move || {
                    let items = cars.get().items;
                    if items.is_empty() {
                        return view! { <p class="admin-dashboard__empty">"No cars in the inventory. Add your first car!"</p> }.into_any();
                    }
                    view! {
                        <table class="inventory-table">
                            <thead>
                                <tr>
                                    <th>"ID"</th>
                                    <th>"Make"</th>
                                    <th>"Model"</th>
                                    <th>"Year"</th>
                                    <th>"Color"</th>
                                    <th>"Price"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|car| {
                                        let id = car.id;
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{car.make}</td>
                                                <td>{car.model}</td>
                                                <td>{car.year}</td>
                                                <td>{car.color}</td>
                                                <td>{format_price(car.price)}</td>
                                                <td>
                                                    <AvailabilityBadge available=car.available/>
                                                </td>
                                                <td class="inventory-table__actions">
                                                    <a class="btn btn--small" href=car_details_path(id)>"View"</a>
                                                    <a class="btn btn--small btn--warning" href=edit_car_path(id)>"Edit"</a>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| on_delete.run(id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </Show>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{move || value.get()}</p>
        </div>
    }
}
