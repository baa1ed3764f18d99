//! Card for one car in the listing grid.

use leptos::prelude::*;

use crate::net::types::Car;
use crate::route::{car_details_path, edit_car_path};
use crate::util::format::{availability_label, format_price};

/// Availability pill shared by the card, the details page and the admin table.
#[component]
pub fn AvailabilityBadge(available: bool) -> impl IntoView {
    view! {
        <span class="badge" class:badge--available=available class:badge--unavailable=!available>
            {availability_label(available)}
        </span>
    }
}

/// A car summary; admins additionally get edit and delete actions.
#[component]
pub fn CarCard(car: Car, #[prop(optional)] admin: bool, #[prop(optional)] on_delete: Option<Callback<i64>>) -> impl IntoView {
    let id = car.id;
    let title = format!("{} {}", car.make, car.model);
    let on_delete_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Some(on_delete) = on_delete {
            on_delete.run(id);
        }
    };

    view! {
        <div class="car-card">
            <h3 class="car-card__title">{title}</h3>
            <p class="car-card__year">{car.year}</p>
            <p class="car-card__meta">
                <strong>"Color: "</strong>
                {car.color}
            </p>
            <p class="car-card__meta">
                <strong>"Price: "</strong>
                {format_price(car.price)}
            </p>
            <p class="car-card__meta">
                <strong>"Status: "</strong>
                <AvailabilityBadge available=car.available/>
            </p>
            <div class="car-card__actions">
                <a class="btn btn--primary" href=car_details_path(id)>"View Details"</a>
                <Show when=move || admin>
                    <a class="btn btn--warning" href=edit_car_path(id)>"Edit"</a>
                    <button class="btn btn--danger" on:click=on_delete_click>"Delete"</button>
                </Show>
            </div>
        </div>
    }
}
