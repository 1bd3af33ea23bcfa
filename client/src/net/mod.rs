//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the auth and menu calls, `error` classifies their failures,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
