//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `cars`, `notice`) so components can
//! depend on small focused models.

pub mod cars;
pub mod notice;
pub mod session;
