use super::*;

fn response(status: u16, body: &str) -> RawResponse {
    RawResponse { status, body: body.to_owned() }
}

#[test]
fn endpoint_prefixes_api_base() {
    assert_eq!(endpoint("/auth/login"), "http://localhost:8000/api/auth/login");
}

#[test]
fn error_message_reads_message_key() {
    assert_eq!(error_message(r#"{"message":"not logged in"}"#), Some("not logged in".to_owned()));
}

#[test]
fn error_message_falls_back_to_detail_key() {
    assert_eq!(
        error_message(r#"{"detail":"Incorrect email or password"}"#),
        Some("Incorrect email or password".to_owned())
    );
}

#[test]
fn error_message_rejects_non_json_and_non_string_values() {
    assert_eq!(error_message("<html>502</html>"), None);
    assert_eq!(error_message(r#"{"message":42}"#), None);
    assert_eq!(error_message(r#"["message"]"#), None);
}

#[test]
fn auth_failure_on_401_regardless_of_body() {
    assert!(is_auth_failure(&response(401, "")));
}

#[test]
fn auth_failure_on_not_logged_in_marker() {
    assert!(is_auth_failure(&response(403, r#"{"message":"user not logged in"}"#)));
    assert!(is_auth_failure(&response(400, r#"{"detail":"not logged in"}"#)));
}

#[test]
fn no_auth_failure_for_other_errors_or_success() {
    assert!(!is_auth_failure(&response(400, r#"{"message":"Email already register"}"#)));
    assert!(!is_auth_failure(&response(500, "")));
    // A success body never triggers recovery even if it mentions the marker.
    assert!(!is_auth_failure(&response(200, r#"{"message":"not logged in"}"#)));
}

#[test]
fn into_result_passes_success_through() {
    let raw = response(201, r#"{"user":{}}"#);
    assert_eq!(raw.clone().into_result().unwrap(), raw);
}

#[test]
fn into_result_surfaces_remote_message() {
    let error = response(400, r#"{"detail":"Inactive user"}"#).into_result().unwrap_err();
    assert_eq!(error, ApiError::Api { status: 400, message: "Inactive user".to_owned() });
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(&response(502, "gateway error")), "request failed with status 502");
}

#[test]
fn json_decodes_typed_bodies() {
    let raw = response(200, r#"{"token":"T"}"#);
    #[derive(serde::Deserialize)]
    struct Body {
        token: String,
    }
    let body: Body = raw.json().unwrap();
    assert_eq!(body.token, "T");
    assert!(matches!(raw.json::<Vec<u8>>(), Err(ApiError::Decode(_))));
}
