//! Page modules for the two screens of the app.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen-scoped orchestration and delegates rendering
//! details to `components`.

pub mod dashboard;
pub mod login;
