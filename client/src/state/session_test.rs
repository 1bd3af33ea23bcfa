use super::*;
use crate::net::error::ApiError;
use crate::net::types::LoginResult;
use crate::state::login::LoginState;

#[test]
fn default_session_shows_login() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert_eq!(state.view(), RootView::Login);
}

#[test]
fn sign_in_switches_to_dashboard() {
    let mut state = SessionState::default();
    state.sign_in(SessionToken::new("abc"));
    assert_eq!(state.view(), RootView::Dashboard(SessionToken::new("abc")));
}

#[test]
fn single_role_login_hands_token_to_root() {
    let mut session = SessionState::default();
    let mut login = LoginState::default();
    login.begin_login().unwrap();
    let token = login.finish_login(Ok(LoginResult::Authenticated(SessionToken::new("only.role.jwt")))).unwrap();
    if let Some(token) = token {
        session.sign_in(token);
    }
    assert_eq!(session.view(), RootView::Dashboard(SessionToken::new("only.role.jwt")));
}

#[test]
fn failed_login_leaves_root_on_login() {
    let session = SessionState::default();
    let mut login = LoginState::default();
    login.begin_login().unwrap();
    assert!(login.finish_login(Err(ApiError::Network("refused".to_owned()))).is_err());
    assert_eq!(session.view(), RootView::Login);
}
