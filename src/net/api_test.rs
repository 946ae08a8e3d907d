use super::*;

use crate::net::types::UserRole;

#[test]
fn recover_password_path_carries_email_query() {
    assert_eq!(recover_password_path("a@b.com"), "/auth/recover_password?email=a@b.com");
}

#[test]
fn register_payload_wraps_user_envelope() {
    let request = RegisterRequest {
        first_name: "Ada".to_owned(),
        last_name: "Byron".to_owned(),
        email: "ada@example.com".to_owned(),
        role: UserRole::Client,
        password: "s3cretpass".to_owned(),
        password_confirm: "s3cretpass".to_owned(),
    };
    let payload = serde_json::json!({ "user": &request });
    assert_eq!(payload["user"]["email"], "ada@example.com");
    assert_eq!(payload["user"]["role"], "client");
}
