//! Catalog fetch/delete flows shared by the car listing and admin dashboard.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as one error notice naming the action; the list keeps
//! its previous contents and nothing is retried.

use leptos::prelude::*;

use crate::components::notice_tray::{notify_error, notify_success};
use crate::config::ClientConfig;
use crate::route::CarId;
use crate::state::cars::CarsState;
use crate::state::notice::NoticeState;
use crate::state::session::BrowserSession;
use crate::util::navigation::confirm;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this car?";
pub const SIGN_IN_REQUIRED: &str = "Please login to continue";

/// Fetch `GET /api/cars` into `cars`.
pub fn load_cars(config: ClientConfig, cars: RwSignal<CarsState>, notices: RwSignal<NoticeState>) {
    cars.update(|c| c.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_cars(&config).await {
            Ok(items) => cars.update(|c| {
                c.items = items;
                c.loading = false;
            }),
            Err(err) => {
                log::warn!("fetching cars failed: {err}");
                notify_error(notices, err.user_message("Failed to fetch cars"));
                cars.update(|c| c.loading = false);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, notices);
        cars.update(|c| c.loading = false);
    }
}

/// Confirm, then `DELETE /api/cars/{id}` and refresh the list.
pub fn delete_car(
    config: ClientConfig,
    session: BrowserSession,
    cars: RwSignal<CarsState>,
    notices: RwSignal<NoticeState>,
    id: CarId,
) {
    if !confirm(DELETE_CONFIRMATION) {
        return;
    }
    let Some(token) = session.credential() else {
        notify_error(notices, SIGN_IN_REQUIRED);
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_car(&config, &token, id).await {
            Ok(_) => {
                notify_success(notices, "Car deleted successfully");
                cars.update(|c| c.remove(id));
                load_cars(config, cars, notices);
            }
            Err(err) => {
                log::warn!("deleting car {id} failed: {err}");
                notify_error(notices, err.user_message("Failed to delete car"));
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token, cars, id);
        notify_success(notices, "Car deleted successfully");
    }
}
