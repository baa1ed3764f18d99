//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch/submit orchestration and delegates rendering
//! details to `components`. Access control is not repeated here: every page
//! is mounted inside `components::guard::Guarded`.

pub mod admin_dashboard;
pub mod auth_home;
pub mod car_details;
pub mod car_form;
pub mod car_list;
pub(crate) mod inventory;
pub mod login;
pub mod register;
