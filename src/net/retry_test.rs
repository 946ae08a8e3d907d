use super::*;

use std::cell::{Cell, RefCell};

use futures::executor::block_on;

fn response(status: u16, body: &str) -> RawResponse {
    RawResponse { status, body: body.to_owned() }
}

const NOT_LOGGED_IN: &str = r#"{"message":"not logged in"}"#;

#[test]
fn success_passes_through_without_refresh() {
    let refreshes = Cell::new(0_u32);
    let result = block_on(SilentRefresh::new().run(
        || async { Ok(response(200, r#"{"ok":true}"#)) },
        || async {
            refreshes.set(refreshes.get() + 1);
            Ok(())
        },
    ));
    assert_eq!(result.unwrap().status, 200);
    assert_eq!(refreshes.get(), 0);
}

#[test]
fn non_auth_failure_passes_through_without_refresh() {
    let refreshes = Cell::new(0_u32);
    let result = block_on(SilentRefresh::new().run(
        || async { Ok(response(400, r#"{"message":"Incorrect email or password"}"#)) },
        || async {
            refreshes.set(refreshes.get() + 1);
            Ok(())
        },
    ));
    assert_eq!(result.unwrap().status, 400);
    assert_eq!(refreshes.get(), 0);
}

#[test]
fn auth_failure_refreshes_then_replays_once() {
    let sends = Cell::new(0_u32);
    let refreshes = Cell::new(0_u32);
    let result = block_on(SilentRefresh::new().run(
        || {
            sends.set(sends.get() + 1);
            let attempt = sends.get();
            async move {
                if attempt == 1 {
                    Ok(response(401, NOT_LOGGED_IN))
                } else {
                    Ok(response(200, r#"{"ok":true}"#))
                }
            }
        },
        || async {
            refreshes.set(refreshes.get() + 1);
            Ok(())
        },
    ));
    assert_eq!(result.unwrap().status, 200);
    assert_eq!(sends.get(), 2);
    assert_eq!(refreshes.get(), 1);
}

#[test]
fn replay_failing_auth_again_does_not_refresh_twice() {
    let sends = Cell::new(0_u32);
    let refreshes = Cell::new(0_u32);
    let result = block_on(SilentRefresh::new().run(
        || {
            sends.set(sends.get() + 1);
            async { Ok(response(401, NOT_LOGGED_IN)) }
        },
        || async {
            refreshes.set(refreshes.get() + 1);
            Ok(())
        },
    ));
    // The replayed failure is terminal and surfaces as-is.
    assert_eq!(result.unwrap().status, 401);
    assert_eq!(sends.get(), 2);
    assert_eq!(refreshes.get(), 1);
}

#[test]
fn refresh_failure_propagates_original_failure() {
    let sends = Cell::new(0_u32);
    let result = block_on(SilentRefresh::new().run(
        || {
            sends.set(sends.get() + 1);
            async { Ok(response(401, NOT_LOGGED_IN)) }
        },
        || async { Err(ApiError::Api { status: 400, message: "bad refresh cookie".to_owned() }) },
    ));
    assert_eq!(
        result.unwrap_err(),
        ApiError::AuthExpired { status: 401, message: "not logged in".to_owned() }
    );
    assert_eq!(sends.get(), 1);
}

#[test]
fn replay_waits_for_refresh_response() {
    let events = RefCell::new(Vec::new());
    let result = block_on(SilentRefresh::new().run(
        || {
            events.borrow_mut().push("send");
            async { Ok(response(401, NOT_LOGGED_IN)) }
        },
        || {
            events.borrow_mut().push("refresh");
            async { Ok(()) }
        },
    ));
    assert!(result.is_ok());
    assert_eq!(*events.borrow(), vec!["send", "refresh", "send"]);
}

#[test]
fn zero_max_replays_disables_recovery() {
    let refreshes = Cell::new(0_u32);
    let result = block_on(SilentRefresh::with_policy(0, is_auth_failure).run(
        || async { Ok(response(401, NOT_LOGGED_IN)) },
        || async {
            refreshes.set(refreshes.get() + 1);
            Ok(())
        },
    ));
    assert_eq!(result.unwrap().status, 401);
    assert_eq!(refreshes.get(), 0);
}

#[test]
fn transport_error_on_first_send_skips_refresh() {
    let refreshes = Cell::new(0_u32);
    let result = block_on(SilentRefresh::new().run(
        || async { Err(ApiError::Network("connection refused".to_owned())) },
        || async {
            refreshes.set(refreshes.get() + 1);
            Ok(())
        },
    ));
    assert_eq!(result.unwrap_err(), ApiError::Network("connection refused".to_owned()));
    assert_eq!(refreshes.get(), 0);
}
