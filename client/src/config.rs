//! Backend API location.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host writes the configured base URL into the shell as a `<meta>` tag
//! during SSR; the hydrated app reads it back so both sides agree on where
//! the auth and menu endpoints live.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// `name` of the shell `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "rolegate-api-base";

/// Where the backend API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE.to_owned() }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolve the config for the current render.
    ///
    /// In the browser this reads the shell `<meta>` tag; during SSR it uses
    /// the context the host provided. Both fall back to the default.
    pub fn resolve() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| {
                    doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
                        .ok()
                        .flatten()
                })
                .and_then(|meta| meta.get_attribute("content"))
                .map(|base| Self::new(&base))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::prelude::use_context::<Self>().unwrap_or_default()
        }
    }
}

/// Trim whitespace and trailing slashes; blank input yields the default.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
