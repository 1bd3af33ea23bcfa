//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `login`, `menu`) so pages and
//! components depend on small focused models that can be tested without a
//! browser.

pub mod login;
pub mod menu;
pub mod session;
