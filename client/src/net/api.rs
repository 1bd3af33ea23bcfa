//! REST calls against the auth and menu endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result` so the triggering page can log the failure and
//! raise a notice while leaving its own state untouched. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Serialize;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::SelectRoleRequest;
use super::types::{Id, LoginResult, MenuNode, SessionToken};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{LoginResponse, PendingAuth, TokenResponse};
use crate::config::ApiConfig;

pub const LOGIN_PATH: &str = "/auth/login";
pub const SELECT_ROLE_PATH: &str = "/auth/select-role";
pub const MENUS_PATH: &str = "/menus";

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Decide which login outcome a 2xx body describes.
///
/// A non-empty `token` wins. Otherwise a non-empty role list together with a
/// non-empty `tempToken` asks for a role choice. Anything else is malformed.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_login(body: LoginResponse) -> Result<LoginResult, ApiError> {
    if let Some(token) = body.token.filter(|t| !t.is_empty()) {
        return Ok(LoginResult::Authenticated(SessionToken::new(token)));
    }
    match (body.roles, body.temp_token) {
        (Some(roles), Some(provisional_token)) if !roles.is_empty() && !provisional_token.is_empty() => {
            Ok(LoginResult::RoleChoiceRequired(PendingAuth { roles, provisional_token }))
        }
        _ => Err(ApiError::Body("login response carried neither a token nor a role list".to_owned())),
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn session_from(body: TokenResponse) -> Result<SessionToken, ApiError> {
    if body.token.is_empty() {
        return Err(ApiError::Body("empty session token".to_owned()));
    }
    Ok(SessionToken::new(body.token))
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<T: Serialize>(
    config: &ApiConfig,
    path: &'static str,
    payload: &T,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = gloo_net::http::Request::post(&config.endpoint(path))
        .json(payload)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(ApiError::Status { endpoint: path, status: resp.status() });
    }
    Ok(resp)
}

/// Submit credentials via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status, or a body
/// that matches neither login outcome.
pub async fn login(config: &ApiConfig, username: &str, password: &str) -> Result<LoginResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(config, LOGIN_PATH, &LoginRequest { username, password }).await?;
        let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Body(e.to_string()))?;
        classify_login(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, username, password);
        Err(ApiError::Unavailable)
    }
}

/// Finalize a session for one role via `POST /auth/select-role`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status, or a body
/// without a token.
pub async fn select_role(config: &ApiConfig, user_id: &Id, role_id: &Id) -> Result<SessionToken, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = SelectRoleRequest { user_id: user_id.clone(), selected_role_id: role_id.clone() };
        let resp = post_json(config, SELECT_ROLE_PATH, &payload).await?;
        let body: TokenResponse = resp.json().await.map_err(|e| ApiError::Body(e.to_string()))?;
        session_from(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, user_id, role_id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the authorized menu tree via `GET /menus`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx status, or a body
/// that is not a list of menu nodes.
pub async fn fetch_menus(config: &ApiConfig, token: &SessionToken) -> Result<Vec<MenuNode>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.endpoint(MENUS_PATH))
            .header("Authorization", &token.bearer())
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(ApiError::Status { endpoint: MENUS_PATH, status: resp.status() });
        }
        resp.json::<Vec<MenuNode>>().await.map_err(|e| ApiError::Body(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}
