//! Top-level session state owned by the root component.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives only in memory; a reload starts a fresh login.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionToken;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<SessionToken>,
}

/// Which page the root component shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootView {
    Login,
    Dashboard(SessionToken),
}

impl SessionState {
    pub fn sign_in(&mut self, token: SessionToken) {
        self.token = Some(token);
    }

    pub fn view(&self) -> RootView {
        match &self.token {
            Some(token) => RootView::Dashboard(token.clone()),
            None => RootView::Login,
        }
    }
}
