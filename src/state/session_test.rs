use super::*;

use crate::net::types::UserRole;

fn user(role: UserRole) -> User {
    User {
        first_name: "Ada".to_owned(),
        last_name: "Byron".to_owned(),
        email: "ada@example.com".to_owned(),
        role,
        is_verified: true,
        is_active: true,
        is_superuser: false,
    }
}

fn session_with(role: UserRole) -> Session {
    Session { user: Some(user(role)) }
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn login_sets_user_from_payload() {
    let next = reduce(Session::default(), &SessionAction::Login(session_with(UserRole::Owner)));
    assert_eq!(next.user.as_ref().map(|u| u.role), Some(UserRole::Owner));
}

#[test]
fn set_user_replaces_snapshot_wholesale() {
    let current = session_with(UserRole::Client);
    let next = reduce(current, &SessionAction::SetUser(session_with(UserRole::Staff)));
    assert_eq!(next, session_with(UserRole::Staff));
}

#[test]
fn logout_clears_user() {
    let next = reduce(session_with(UserRole::Owner), &SessionAction::Logout(Session::default()));
    assert_eq!(next, Session::default());
}

#[test]
fn logout_is_idempotent() {
    let action = SessionAction::Logout(Session::default());
    let once = reduce(session_with(UserRole::Staff), &action);
    let twice = reduce(once, &action);
    assert_eq!(twice, Session::default());
}

#[test]
fn reduce_is_deterministic() {
    let action = SessionAction::Login(session_with(UserRole::Client));
    let a = reduce(Session::default(), &action);
    let b = reduce(Session::default(), &action);
    assert_eq!(a, b);
}

// =============================================================
// GenerationClock
// =============================================================

#[test]
fn issue_is_strictly_monotonic() {
    let mut clock = GenerationClock::default();
    assert_eq!(clock.issue(), 1);
    assert_eq!(clock.issue(), 2);
    assert_eq!(clock.issue(), 3);
}

#[test]
fn admit_accepts_in_order_completions() {
    let mut clock = GenerationClock::default();
    let first = clock.issue();
    let second = clock.issue();
    assert!(clock.admit(first));
    assert!(clock.admit(second));
}

#[test]
fn stale_completion_is_dropped() {
    // A slow profile fetch from bootstrap races a fast logout: the logout is
    // issued later and completes first, so the profile result must be dropped.
    let mut clock = GenerationClock::default();
    let profile_fetch = clock.issue();
    let logout = clock.issue();
    assert!(clock.admit(logout));
    assert!(!clock.admit(profile_fetch));
}

#[test]
fn reissued_watermark_generation_is_admitted() {
    let mut clock = GenerationClock::default();
    let generation = clock.issue();
    assert!(clock.admit(generation));
    assert!(clock.admit(generation));
}
