//! Wire DTOs for the car inventory REST API.
//!
//! DESIGN
//! ======
//! Request bodies and response records mirror the JSON the API speaks so
//! serde handles every conversion; optional response fields default instead
//! of failing the whole decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::route::CarId;

/// A car record as returned by `GET /api/cars` and `GET /api/cars/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    /// Price in dollars.
    pub price: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Body of `POST /api/cars`: a car record without its identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    pub available: bool,
}

/// Partial body of `PUT /api/cars/{id}`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CarUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl CarUpdate {
    /// The only update a regular user may send: mark the car unavailable.
    pub fn reserve() -> Self {
        Self { available: Some(false), ..Self::default() }
    }
}

impl From<NewCar> for CarUpdate {
    fn from(car: NewCar) -> Self {
        Self {
            make: Some(car.make),
            model: Some(car.model),
            year: Some(car.year),
            color: Some(car.color),
            price: Some(car.price),
            available: Some(car.available),
        }
    }
}

/// Body of `POST /api/login` and `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful `POST /api/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// The user behind a bearer token, from `GET /api/user`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Successful `POST /api/cars` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedCar {
    pub id: CarId,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shape returned with non-2xx statuses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

fn default_available() -> bool {
    true
}
