//! Login form state machine.
//!
//! DESIGN
//! ======
//! `Idle -> AwaitingRoleChoice -> Done`. Every transition method takes the
//! result of one network call; a failed call returns the error and leaves the
//! stage exactly as it was. At most one request is in flight (`busy`).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::error::ApiError;
use crate::net::types::{Credentials, Id, LoginResult, PendingAuth, RoleOption, SelectRoleRequest, SessionToken};
use crate::util::token::{self, DecodeError};

/// Notice shown when credential login fails.
pub const LOGIN_FAILED_NOTICE: &str = "Login failed";
/// Notice shown when role confirmation fails.
pub const SELECT_ROLE_FAILED_NOTICE: &str = "Select role failed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("a request is already in flight")]
    Busy,
    #[error("no role selected")]
    NoRoleSelected,
    #[error("selected role is not one of the offered roles")]
    UnknownRole,
    #[error("no role choice is pending")]
    NotAwaitingRole,
}

/// Where the login flow currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStage {
    #[default]
    Idle,
    AwaitingRoleChoice(PendingAuth),
    Done(SessionToken),
}

/// Form inputs plus the flow stage.
#[derive(Clone, Debug, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub stage: LoginStage,
    pub selected_role: Option<Id>,
    pub busy: bool,
}

impl LoginState {
    /// Roles on offer; empty unless a role choice is pending.
    pub fn roles(&self) -> &[RoleOption] {
        match &self.stage {
            LoginStage::AwaitingRoleChoice(pending) => &pending.roles,
            _ => &[],
        }
    }

    /// Select the offered role whose id renders as `value`; unknown or empty
    /// values clear the selection.
    pub fn select_role_value(&mut self, value: &str) {
        self.selected_role = match &self.stage {
            LoginStage::AwaitingRoleChoice(pending) => pending.role_by_value(value).map(|role| role.id.clone()),
            _ => None,
        };
    }

    pub fn can_confirm(&self) -> bool {
        !self.busy && self.selected_role.is_some() && matches!(self.stage, LoginStage::AwaitingRoleChoice(_))
    }

    /// Mark a login request as started and hand back what to submit.
    ///
    /// # Errors
    ///
    /// [`LoginError::Busy`] while another request is in flight.
    pub fn begin_login(&mut self) -> Result<Credentials, LoginError> {
        if self.busy {
            return Err(LoginError::Busy);
        }
        self.busy = true;
        Ok(Credentials { username: self.username.clone(), password: self.password.clone() })
    }

    /// Apply the outcome of `login`. Returns the session token once the flow
    /// is done, `None` when a role choice is now pending.
    ///
    /// # Errors
    ///
    /// Passes the API failure through; the stage is unchanged.
    pub fn finish_login(&mut self, result: Result<LoginResult, ApiError>) -> Result<Option<SessionToken>, LoginError> {
        self.busy = false;
        let outcome = result?;
        self.password.clear();
        self.selected_role = None;
        match outcome {
            LoginResult::Authenticated(token) => {
                self.stage = LoginStage::Done(token.clone());
                Ok(Some(token))
            }
            LoginResult::RoleChoiceRequired(pending) => {
                self.stage = LoginStage::AwaitingRoleChoice(pending);
                Ok(None)
            }
        }
    }

    /// Build the role confirmation request and mark it as started.
    ///
    /// The user id comes from the provisional token's unverified payload.
    ///
    /// # Errors
    ///
    /// Fails without side effects when busy, when no role choice is pending,
    /// when nothing (or something not offered) is selected, or when the
    /// provisional token cannot be decoded.
    pub fn begin_role_confirmation(&mut self) -> Result<SelectRoleRequest, LoginError> {
        if self.busy {
            return Err(LoginError::Busy);
        }
        let LoginStage::AwaitingRoleChoice(pending) = &self.stage else {
            return Err(LoginError::NotAwaitingRole);
        };
        let role_id = self.selected_role.clone().ok_or(LoginError::NoRoleSelected)?;
        if !pending.offers(&role_id) {
            return Err(LoginError::UnknownRole);
        }
        let claims = token::decode(&pending.provisional_token)?;
        self.busy = true;
        Ok(SelectRoleRequest { user_id: claims.user_id, selected_role_id: role_id })
    }

    /// Apply the outcome of `select_role`.
    ///
    /// # Errors
    ///
    /// Passes the API failure through; the pending role choice is kept.
    pub fn finish_role_selection(&mut self, result: Result<SessionToken, ApiError>) -> Result<SessionToken, LoginError> {
        self.busy = false;
        let token = result?;
        self.selected_role = None;
        self.stage = LoginStage::Done(token.clone());
        Ok(token)
    }
}
