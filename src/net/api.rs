//! REST API helpers for the car inventory backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning `ApiError::Unavailable`
//! since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Callers turn failures into a
//! single user-visible notice with `ApiError::user_message`; nothing is
//! retried here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{ApiMessage, Car, CarUpdate, CreatedCar, Credentials, CurrentUser, LoginResponse, NewCar};
use crate::config::ClientConfig;
use crate::route::CarId;

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const REGISTER_ENDPOINT: &str = "/api/register";
pub const CURRENT_USER_ENDPOINT: &str = "/api/user";
pub const CARS_ENDPOINT: &str = "/api/cars";

pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),
    /// The API answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP is not available outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text for the notice shown after a failed user action.
    ///
    /// Prefers the API's own `error` message, then the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport(_) => CONNECTION_ERROR_MESSAGE.to_owned(),
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } | Self::Decode(_) | Self::Unavailable => fallback.to_owned(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Rejected { status: 404, .. })
    }
}

#[cfg(any(test, feature = "csr"))]
fn car_endpoint(id: CarId) -> String {
    format!("{CARS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Build the error for a non-2xx response from its status and raw body.
#[cfg(any(test, feature = "csr"))]
fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ApiErrorBody>(body).ok().map(|b| b.error);
    ApiError::Rejected { status, message }
}

#[cfg(feature = "csr")]
mod http {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer, rejection};

    pub(super) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &bearer(token))
    }

    pub(super) fn with_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Request, ApiError> {
        builder.json(body).map_err(|e| ApiError::Transport(e.to_string()))
    }

    pub(super) async fn send_request<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        read(resp).await
    }

    pub(super) async fn send_builder<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        read(resp).await
    }

    async fn read<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(status, &body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Exchange a username/password for a bearer token via `POST /api/login`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for bad credentials and `Transport` when the
/// API is unreachable.
pub async fn login(config: &ClientConfig, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = gloo_net::http::Request::post(&config.endpoint(LOGIN_ENDPOINT));
        http::send_request(http::with_json(builder, credentials)?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when the username is taken or incomplete.
pub async fn register(config: &ClientConfig, credentials: &Credentials) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = gloo_net::http::Request::post(&config.endpoint(REGISTER_ENDPOINT));
        http::send_request(http::with_json(builder, credentials)?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Validate a bearer token against `GET /api/user`.
///
/// # Errors
///
/// Any non-2xx status means the token is invalid or expired.
pub async fn fetch_current_user(config: &ClientConfig, token: &str) -> Result<CurrentUser, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = gloo_net::http::Request::get(&config.endpoint(CURRENT_USER_ENDPOINT));
        http::send_builder(http::authorized(builder, token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the full catalog from `GET /api/cars`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a car list.
pub async fn fetch_cars(config: &ClientConfig) -> Result<Vec<Car>, ApiError> {
    #[cfg(feature = "csr")]
    {
        http::send_builder(gloo_net::http::Request::get(&config.endpoint(CARS_ENDPOINT))).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one car from `GET /api/cars/{id}`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with status 404 when the car does not exist.
pub async fn fetch_car(config: &ClientConfig, id: CarId) -> Result<Car, ApiError> {
    #[cfg(feature = "csr")]
    {
        http::send_builder(gloo_net::http::Request::get(&config.endpoint(&car_endpoint(id)))).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, id);
        Err(ApiError::Unavailable)
    }
}

/// Add a car via `POST /api/cars`. Admin only.
///
/// # Errors
///
/// Returns `ApiError::Rejected` for validation failures or missing privileges.
pub async fn create_car(config: &ClientConfig, token: &str, car: &NewCar) -> Result<CreatedCar, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = http::authorized(gloo_net::http::Request::post(&config.endpoint(CARS_ENDPOINT)), token);
        http::send_request(http::with_json(builder, car)?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token, car);
        Err(ApiError::Unavailable)
    }
}

/// Apply a partial update via `PUT /api/cars/{id}`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when the car is missing or the update is refused.
pub async fn update_car(config: &ClientConfig, token: &str, id: CarId, update: &CarUpdate) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = http::authorized(gloo_net::http::Request::put(&config.endpoint(&car_endpoint(id))), token);
        http::send_request(http::with_json(builder, update)?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token, id, update);
        Err(ApiError::Unavailable)
    }
}

/// Reserve a car by marking it unavailable.
///
/// # Errors
///
/// Same as [`update_car`].
pub async fn reserve_car(config: &ClientConfig, token: &str, id: CarId) -> Result<ApiMessage, ApiError> {
    update_car(config, token, id, &CarUpdate::reserve()).await
}

/// Remove a car via `DELETE /api/cars/{id}`. Admin only.
///
/// # Errors
///
/// Returns `ApiError::Rejected` when the car is missing or privileges are insufficient.
pub async fn delete_car(config: &ClientConfig, token: &str, id: CarId) -> Result<ApiMessage, ApiError> {
    #[cfg(feature = "csr")]
    {
        let builder = gloo_net::http::Request::delete(&config.endpoint(&car_endpoint(id)));
        http::send_builder(http::authorized(builder, token)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, token, id);
        Err(ApiError::Unavailable)
    }
}
