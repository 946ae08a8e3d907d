use super::*;

#[test]
fn validate_email_input_trims() {
    assert_eq!(validate_email_input(" a@b.com "), Ok("a@b.com".to_owned()));
}

#[test]
fn validate_email_input_requires_value() {
    assert_eq!(validate_email_input("   "), Err("Enter your email first."));
}
