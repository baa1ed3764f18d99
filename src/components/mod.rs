//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and shared car displays while
//! reading session and notice state from Leptos context providers.

pub mod car_card;
pub mod footer;
pub mod guard;
pub mod navbar;
pub mod notice_tray;
