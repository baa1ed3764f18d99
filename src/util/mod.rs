//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod credentials;
pub mod format;
pub mod forms;
pub mod navigation;
