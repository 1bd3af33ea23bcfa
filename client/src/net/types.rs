//! Wire types shared by the auth and menu endpoints.
//!
//! DESIGN
//! ======
//! Identifiers are kept in whatever JSON shape the backend sent (number or
//! string) so they round-trip into follow-up requests unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier for users, roles, and menu nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Username/password pair posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A role the user may act as, offered when login is ambiguous.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    pub id: Id,
    pub name: String,
}

/// Raw `/auth/login` body. Exactly one of the two shapes is expected.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub roles: Option<Vec<RoleOption>>,
    #[serde(default, rename = "tempToken")]
    pub temp_token: Option<String>,
}

/// Body posted to `/auth/select-role`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectRoleRequest {
    pub user_id: Id,
    pub selected_role_id: Id,
}

/// Body returned by `/auth/select-role`.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Opaque bearer credential for an authenticated session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` request header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Role list plus the provisional token that carries the user id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAuth {
    pub roles: Vec<RoleOption>,
    pub provisional_token: String,
}

impl PendingAuth {
    /// Find the offered role whose id renders as `value` (an `<option>` value).
    pub fn role_by_value(&self, value: &str) -> Option<&RoleOption> {
        self.roles.iter().find(|role| role.id.to_string() == value)
    }

    pub fn offers(&self, id: &Id) -> bool {
        self.roles.iter().any(|role| &role.id == id)
    }
}

/// Outcome of a successful credential login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginResult {
    Authenticated(SessionToken),
    RoleChoiceRequired(PendingAuth),
}

/// One entry in the authorized navigation hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
