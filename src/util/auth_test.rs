use super::*;

use crate::net::types::User;

fn session_with(role: UserRole) -> Session {
    Session {
        user: Some(User {
            first_name: "Ada".to_owned(),
            last_name: "Byron".to_owned(),
            email: "ada@example.com".to_owned(),
            role,
            is_verified: true,
            is_active: true,
            is_superuser: false,
        }),
    }
}

#[test]
fn entry_redirect_sends_privileged_roles_to_dashboard() {
    assert_eq!(entry_redirect(&session_with(UserRole::Owner)), Some(paths::DASHBOARD));
    assert_eq!(entry_redirect(&session_with(UserRole::Staff)), Some(paths::DASHBOARD));
}

#[test]
fn entry_redirect_sends_clients_home() {
    assert_eq!(entry_redirect(&session_with(UserRole::Client)), Some(paths::HOME));
}

#[test]
fn entry_redirect_leaves_anonymous_visitors_alone() {
    assert_eq!(entry_redirect(&Session::default()), None);
}

#[test]
fn dashboard_redirect_sends_clients_to_account() {
    assert_eq!(dashboard_redirect(&session_with(UserRole::Client)), Some(paths::ACCOUNT));
}

#[test]
fn dashboard_redirect_keeps_privileged_roles() {
    assert_eq!(dashboard_redirect(&session_with(UserRole::Owner)), None);
    assert_eq!(dashboard_redirect(&session_with(UserRole::Staff)), None);
}

#[test]
fn dashboard_redirect_ignores_anonymous_visitors() {
    assert_eq!(dashboard_redirect(&Session::default()), None);
}
