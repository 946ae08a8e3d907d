use super::*;

#[test]
fn validate_profile_input_builds_partial_update() {
    let update = validate_profile_input(" Ada ", "").unwrap();
    assert_eq!(update.first_name.as_deref(), Some("Ada"));
    assert_eq!(update.last_name, None);
    assert_eq!(update.role, None);
}

#[test]
fn validate_profile_input_accepts_both_fields() {
    let update = validate_profile_input("Ada", "Lovelace").unwrap();
    assert_eq!(update.first_name.as_deref(), Some("Ada"));
    assert_eq!(update.last_name.as_deref(), Some("Lovelace"));
}

#[test]
fn validate_profile_input_requires_a_change() {
    assert_eq!(validate_profile_input("  ", ""), Err("Change at least one field."));
}
