use super::*;

#[test]
fn mismatched_confirmation_is_checked_first() {
    assert_eq!(
        validate_register_input("", "abc", "abd"),
        Err("Passwords do not match.".to_owned())
    );
}

#[test]
fn short_password_uses_core_policy_message() {
    assert_eq!(
        validate_register_input("bob", "abc", "abc"),
        Err("Password must be at least 6 characters.".to_owned())
    );
}

#[test]
fn blank_username_is_rejected() {
    assert_eq!(
        validate_register_input("  ", "secret1", "secret1"),
        Err("Username is required.".to_owned())
    );
}

#[test]
fn valid_input_passes() {
    assert_eq!(validate_register_input("bob", "secret1", "secret1"), Ok(()));
}

#[test]
fn success_message_appends_redirect_notice() {
    assert_eq!(
        register_success_message(Some("User created successfully.")),
        "User created successfully. Redirecting to login..."
    );
    assert_eq!(register_success_message(None), "Registration successful. Redirecting to login...");
    assert_eq!(register_success_message(Some(" ")), "Registration successful. Redirecting to login...");
}
