//! Car catalog state shared by the listing and the admin dashboard.
//!
//! DESIGN
//! ======
//! Search and availability filtering run client-side over the last fetched
//! list; the API has no query parameters.

#[cfg(test)]
#[path = "cars_test.rs"]
mod cars_test;

use crate::net::types::Car;

/// Availability filter offered next to the search box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvailabilityFilter {
    #[default]
    All,
    Available,
    Unavailable,
}

impl AvailabilityFilter {
    /// Parse a `<select>` value; unknown values fall back to `All`.
    pub fn from_value(raw: &str) -> Self {
        match raw {
            "available" => Self::Available,
            "unavailable" => Self::Unavailable,
            _ => Self::All,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
        }
    }

    fn admits(self, car: &Car) -> bool {
        match self {
            Self::All => true,
            Self::Available => car.available,
            Self::Unavailable => !car.available,
        }
    }
}

/// Inventory counts for the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
}

/// Listing state: fetched cars plus the current search inputs.
#[derive(Clone, Debug, Default)]
pub struct CarsState {
    pub items: Vec<Car>,
    pub loading: bool,
    pub search: String,
    pub filter: AvailabilityFilter,
}

impl CarsState {
    /// Cars matching the current search and filter, in API order.
    pub fn visible(&self) -> Vec<Car> {
        filter_cars(&self.items, &self.search, self.filter)
    }

    pub fn stats(&self) -> InventoryStats {
        inventory_stats(&self.items)
    }

    pub fn remove(&mut self, id: crate::route::CarId) {
        self.items.retain(|car| car.id != id);
    }
}

/// Case-insensitive match on make, model or color; substring match on year.
pub fn matches_search(car: &Car, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    car.make.to_lowercase().contains(&term)
        || car.model.to_lowercase().contains(&term)
        || car.color.to_lowercase().contains(&term)
        || car.year.to_string().contains(&term)
}

pub fn filter_cars(cars: &[Car], term: &str, filter: AvailabilityFilter) -> Vec<Car> {
    cars.iter().filter(|car| filter.admits(car) && matches_search(car, term)).cloned().collect()
}

pub fn inventory_stats(cars: &[Car]) -> InventoryStats {
    let available = cars.iter().filter(|car| car.available).count();
    InventoryStats { total: cars.len(), available, unavailable: cars.len() - available }
}
