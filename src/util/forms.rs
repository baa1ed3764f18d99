//! Client-side form validation.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the API. Each `FormError` displays as the
//! exact notice text the page shows.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use thiserror::Error;

use crate::net::types::{Car, Credentials, NewCar};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Year must be a valid number between 1900 and 2100")]
    InvalidYear,
    #[error("Price must be a positive number")]
    InvalidPrice,
}

/// Trim the username and require both fields.
///
/// # Errors
///
/// Returns `FormError::MissingFields` if either value is blank.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, FormError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(FormError::MissingFields);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Login rules plus a matching confirmation.
///
/// # Errors
///
/// Returns `MissingFields` for blanks and `PasswordMismatch` when the
/// confirmation differs.
pub fn validate_registration(username: &str, password: &str, confirm: &str) -> Result<Credentials, FormError> {
    if confirm.is_empty() {
        return Err(FormError::MissingFields);
    }
    let credentials = validate_login(username, password)?;
    if credentials.password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(credentials)
}

/// Raw text inputs of the add/edit car form.
#[derive(Clone, Debug, PartialEq)]
pub struct CarDraft {
    pub make: String,
    pub model: String,
    pub year: String,
    pub color: String,
    pub price: String,
    pub available: bool,
}

impl Default for CarDraft {
    fn default() -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            year: String::new(),
            color: String::new(),
            price: String::new(),
            available: true,
        }
    }
}

impl CarDraft {
    /// Prefill the edit form from a fetched car.
    pub fn from_car(car: &Car) -> Self {
        Self {
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year.to_string(),
            color: car.color.clone(),
            price: car.price.to_string(),
            available: car.available,
        }
    }

    /// Convert to an API body.
    ///
    /// # Errors
    ///
    /// Checks run in order: required fields, year range, positive price.
    pub fn validate(&self) -> Result<NewCar, FormError> {
        let make = self.make.trim();
        let model = self.model.trim();
        let year = self.year.trim();
        let color = self.color.trim();
        let price = self.price.trim();
        if [make, model, year, color, price].iter().any(|field| field.is_empty()) {
            return Err(FormError::MissingFields);
        }
        let year = year
            .parse::<i32>()
            .ok()
            .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
            .ok_or(FormError::InvalidYear)?;
        let price = price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or(FormError::InvalidPrice)?;
        Ok(NewCar {
            make: make.to_owned(),
            model: model.to_owned(),
            year,
            color: color.to_owned(),
            price,
            available: self.available,
        })
    }
}
