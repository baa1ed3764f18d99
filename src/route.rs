//! Navigable routes and their access requirements.
//!
//! DESIGN
//! ======
//! Paths are parsed into a closed enum so the guard in `util::auth` can match
//! exhaustively instead of comparing strings.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

pub const ROOT_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ADMIN_PATH: &str = "/admin";
pub const CARS_PATH: &str = "/cars";
pub const ADD_CAR_PATH: &str = "/cars/add";

/// Server-assigned car identifier.
pub type CarId = i64;

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Never rendered; always redirects to the role-appropriate view.
    RedirectOnly,
    /// Login/register screens; signed-in users are sent to their landing.
    GuestOnly,
    /// Requires a validated session.
    Authenticated,
    /// Requires a validated session with the admin flag.
    Admin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Root,
    AuthHome,
    Login,
    Register,
    AdminDashboard,
    CarList,
    CarDetails(CarId),
    AddCar,
    EditCar(CarId),
    NotFound,
}

impl AppRoute {
    /// Classify a location pathname. Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Root,
            ["auth"] => Self::AuthHome,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["admin"] => Self::AdminDashboard,
            ["cars"] => Self::CarList,
            ["cars", "add"] => Self::AddCar,
            ["cars", "edit", id] => parse_car_id(id).map_or(Self::NotFound, Self::EditCar),
            ["cars", id] => parse_car_id(id).map_or(Self::NotFound, Self::CarDetails),
            _ => Self::NotFound,
        }
    }

    pub fn access(self) -> Access {
        match self {
            Self::Root | Self::NotFound => Access::RedirectOnly,
            Self::AuthHome | Self::Login | Self::Register => Access::GuestOnly,
            Self::CarList | Self::CarDetails(_) => Access::Authenticated,
            Self::AdminDashboard | Self::AddCar | Self::EditCar(_) => Access::Admin,
        }
    }

    /// Route for a `:id` parameter, e.g. `AppRoute::with_car_id(raw, AppRoute::CarDetails)`.
    /// A missing or malformed id yields `NotFound`.
    pub fn with_car_id(raw: Option<&str>, route: fn(CarId) -> Self) -> Self {
        raw.and_then(parse_car_id).map_or(Self::NotFound, route)
    }
}

pub fn car_details_path(id: CarId) -> String {
    format!("/cars/{id}")
}

pub fn edit_car_path(id: CarId) -> String {
    format!("/cars/edit/{id}")
}

/// Only positive integers name a car.
pub fn parse_car_id(raw: &str) -> Option<CarId> {
    raw.parse::<CarId>().ok().filter(|id| *id > 0)
}
