use super::*;
use crate::net::types::RoleOption;

fn body(json: &str) -> LoginResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn endpoint_paths_match_backend_routes() {
    let config = ApiConfig::new("http://localhost:3000");
    assert_eq!(config.endpoint(LOGIN_PATH), "http://localhost:3000/auth/login");
    assert_eq!(config.endpoint(SELECT_ROLE_PATH), "http://localhost:3000/auth/select-role");
    assert_eq!(config.endpoint(MENUS_PATH), "http://localhost:3000/menus");
}

#[test]
fn login_request_serializes_credentials() {
    let payload = serde_json::to_value(LoginRequest { username: "alice", password: "pw" }).unwrap();
    assert_eq!(payload, serde_json::json!({ "username": "alice", "password": "pw" }));
}

#[test]
fn select_role_request_uses_backend_field_names() {
    let payload = serde_json::to_value(crate::net::types::SelectRoleRequest {
        user_id: Id::Int(5),
        selected_role_id: Id::Int(1),
    })
    .unwrap();
    assert_eq!(payload, serde_json::json!({ "user_id": 5, "selected_role_id": 1 }));
}

// =============================================================
// classify_login
// =============================================================

#[test]
fn classify_login_token_is_authenticated() {
    let result = classify_login(body(r#"{"token":"final.jwt"}"#)).unwrap();
    assert_eq!(result, LoginResult::Authenticated(SessionToken::new("final.jwt")));
}

#[test]
fn classify_login_roles_require_choice() {
    let result =
        classify_login(body(r#"{"roles":[{"id":1,"name":"Admin"},{"id":2,"name":"User"}],"tempToken":"eyJ.a.b"}"#))
            .unwrap();
    let LoginResult::RoleChoiceRequired(pending) = result else {
        panic!("expected role choice");
    };
    assert_eq!(
        pending.roles,
        vec![
            RoleOption { id: Id::Int(1), name: "Admin".to_owned() },
            RoleOption { id: Id::Int(2), name: "User".to_owned() },
        ]
    );
    assert_eq!(pending.provisional_token, "eyJ.a.b");
}

#[test]
fn classify_login_token_wins_over_roles() {
    let result = classify_login(body(r#"{"token":"t","roles":[{"id":1,"name":"A"}],"tempToken":"x"}"#)).unwrap();
    assert!(matches!(result, LoginResult::Authenticated(_)));
}

#[test]
fn classify_login_empty_token_falls_through_to_roles() {
    let result = classify_login(body(r#"{"token":"","roles":[{"id":1,"name":"A"}],"tempToken":"x"}"#)).unwrap();
    assert!(matches!(result, LoginResult::RoleChoiceRequired(_)));
}

#[test]
fn classify_login_rejects_roles_without_temp_token() {
    let err = classify_login(body(r#"{"roles":[{"id":1,"name":"A"}]}"#)).unwrap_err();
    assert!(matches!(err, ApiError::Body(_)));
}

#[test]
fn classify_login_rejects_empty_role_list() {
    let err = classify_login(body(r#"{"roles":[],"tempToken":"x"}"#)).unwrap_err();
    assert!(matches!(err, ApiError::Body(_)));
}

#[test]
fn classify_login_rejects_empty_body() {
    assert!(classify_login(body("{}")).is_err());
}

// =============================================================
// session_from
// =============================================================

#[test]
fn session_from_wraps_token() {
    let token = session_from(TokenResponse { token: "final.jwt".to_owned() }).unwrap();
    assert_eq!(token.as_str(), "final.jwt");
}

#[test]
fn session_from_rejects_empty_token() {
    assert!(session_from(TokenResponse { token: String::new() }).is_err());
}
