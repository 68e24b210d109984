//! Credential validation edge cases

use abcp_core::{Credentials, CredentialsError};
use pretty_assertions::assert_eq;

const PSW: &str = "61c0cd30306ab9fbcef92d8a3bd1a4cb";

#[test]
fn bad_password_rejected_first() {
    // Password shape is checked before host and login, so even garbage
    // host/login report the password problem.
    let err = Credentials::new("??", "??", "nothex!").unwrap_err();
    assert_eq!(err, CredentialsError::PasswordType);
}

#[test]
fn api_login_is_admin() {
    let creds = Credentials::new("id12345.example.com", "api@id12345", PSW).unwrap();
    assert!(creds.is_admin());
}

#[test]
fn digit_login_is_client() {
    let creds = Credentials::new("id1.example.com", "12345678", PSW).unwrap();
    assert!(!creds.is_admin());
}

#[test]
fn email_login_is_client() {
    let creds = Credentials::new("id1.example.com", "user.name@example.com", PSW).unwrap();
    assert!(!creds.is_admin());
}

#[test]
fn host_without_id_prefix_rejected() {
    let err = Credentials::new("public.api.abcp.ru", "12345678", PSW).unwrap_err();
    assert_eq!(
        err,
        CredentialsError::UnsupportedHost("public.api.abcp.ru".to_string())
    );
}

#[test]
fn login_neither_digits_nor_email_rejected() {
    let err = Credentials::new("id1.example.com", "not a login", PSW).unwrap_err();
    assert!(matches!(err, CredentialsError::UnsupportedLogin(_)));
}

#[test]
fn malformed_email_rejected() {
    let err = Credentials::new("id1.example.com", "user@@example", PSW).unwrap_err();
    assert!(matches!(err, CredentialsError::UnsupportedLogin(_)));
}

#[test]
fn validation_is_deterministic() {
    for _ in 0..3 {
        let creds = Credentials::new("id1.example.com", "12345678", PSW).unwrap();
        assert!(!creds.is_admin());
        let err = Credentials::new("id1.example.com", "1234", PSW).unwrap_err();
        assert!(matches!(err, CredentialsError::UnsupportedLogin(_)));
    }
}

#[test]
fn accessors_return_inputs_unchanged() {
    let creds = Credentials::new("id200.public.api.abcp.ru", "api@id200", PSW).unwrap();
    assert_eq!(creds.host(), "id200.public.api.abcp.ru");
    assert_eq!(creds.login(), "api@id200");
    assert_eq!(creds.password(), PSW);
}
