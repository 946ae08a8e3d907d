use super::*;

use crate::net::types::{User, UserRole};

fn profile() -> UserProfile {
    UserProfile {
        user: User {
            first_name: "Ada".to_owned(),
            last_name: "Byron".to_owned(),
            email: "ada@example.com".to_owned(),
            role: UserRole::Owner,
            is_verified: true,
            is_active: true,
            is_superuser: false,
        },
    }
}

#[test]
fn no_token_means_no_bootstrap() {
    assert!(!needs_bootstrap(None));
}

#[test]
fn stored_token_requires_bootstrap() {
    assert!(needs_bootstrap(Some("T")));
}

#[test]
fn successful_fetch_keeps_token_and_sets_user() {
    let (clear_token, action) = settle(Ok(profile()));
    assert!(!clear_token);
    assert_eq!(action, SessionAction::SetUser(Session { user: Some(profile().user) }));
}

#[test]
fn expired_session_clears_token_and_logs_out() {
    let outcome = Err(ApiError::AuthExpired { status: 401, message: "not logged in".to_owned() });
    let (clear_token, action) = settle(outcome);
    assert!(clear_token);
    assert_eq!(action, SessionAction::Logout(Session::default()));
}

#[test]
fn any_fetch_failure_forces_logout() {
    let outcome = Err(ApiError::Network("connection refused".to_owned()));
    let (clear_token, action) = settle(outcome);
    assert!(clear_token);
    assert_eq!(action, SessionAction::Logout(Session::default()));
}
