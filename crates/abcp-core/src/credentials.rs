//! Credential validation
//!
//! ABCP authenticates every request with two query parameters: a login and
//! an MD5-hex password. The login shape also decides the privilege tier:
//! `api@...` logins are administrative, numeric ids and emails are regular
//! client accounts. Validation runs exactly once, at construction, so a
//! badly configured client fails before its first request.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CredentialsError;

/// Prefix of administrative API logins
pub const ADMIN_LOGIN_PREFIX: &str = "api@";

fn md5_hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-f0-9]{32}$").expect("valid regex"))
}

fn host_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^id[0-9]{1,5}\.").expect("valid regex"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[\w.]+@([\w-]+\.)+[\w-]{2,6}$").expect("valid regex")
    })
}

/// Validated, immutable credentials for one ABCP host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    host: String,
    login: String,
    password: String,
    is_admin: bool,
}

impl Credentials {
    /// Validate a (host, login, password) triple
    ///
    /// Checks run in a fixed order: password shape first, host shape
    /// second, login shape last. The login shape decides the privilege
    /// tier.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError::PasswordType` if the password is not a
    /// 32-character lowercase hex digest, `UnsupportedHost` if the host
    /// does not look like `id<digits>.<domain>` (1 to 5 digits), and
    /// `UnsupportedLogin` if the login is none of the three accepted
    /// shapes.
    ///
    /// # Example
    ///
    /// ```
    /// use abcp_core::Credentials;
    ///
    /// let creds = Credentials::new(
    ///     "id200.public.api.abcp.ru",
    ///     "api@id200",
    ///     "61c0cd30306ab9fbcef92d8a3bd1a4cb",
    /// ).unwrap();
    /// assert!(creds.is_admin());
    /// ```
    pub fn new(
        host: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let host = host.into();
        let login = login.into();
        let password = password.into();

        if !md5_hex_re().is_match(&password) {
            return Err(CredentialsError::PasswordType);
        }
        if !host_re().is_match(&host) {
            return Err(CredentialsError::UnsupportedHost(host));
        }
        let is_admin = check_login(&login)?;

        Ok(Self {
            host,
            login,
            password,
            is_admin,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether the login shape grants access to the administrative API
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

/// Classify a login into a privilege tier
///
/// Accepted shapes, checked in order:
/// 1. `api@...` prefix: administrative login.
/// 2. all digits, length strictly between 4 and 14: client login.
/// 3. email: client login.
fn check_login(login: &str) -> Result<bool, CredentialsError> {
    if login.starts_with(ADMIN_LOGIN_PREFIX) {
        return Ok(true);
    }
    if login.chars().all(|c| c.is_ascii_digit()) && login.len() > 4 && login.len() < 14 {
        return Ok(false);
    }
    if login.contains('@') && email_re().is_match(login) {
        return Ok(false);
    }
    Err(CredentialsError::UnsupportedLogin(login.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PSW: &str = "61c0cd30306ab9fbcef92d8a3bd1a4cb";

    #[test]
    fn password_checked_before_host() {
        let err = Credentials::new("not-a-host", "12345678", "nothex!").unwrap_err();
        assert_eq!(err, CredentialsError::PasswordType);
    }

    #[test]
    fn uppercase_hex_rejected() {
        let err =
            Credentials::new("id1.example.com", "12345678", &PSW.to_uppercase()).unwrap_err();
        assert_eq!(err, CredentialsError::PasswordType);
    }

    #[test]
    fn host_digits_capped_at_five() {
        assert!(Credentials::new("id123456.example.com", "12345678", PSW).is_err());
        assert!(Credentials::new("id12345.example.com", "12345678", PSW).is_ok());
    }

    #[test]
    fn digit_login_length_bounds() {
        assert!(Credentials::new("id1.example.com", "1234", PSW).is_err());
        assert!(Credentials::new("id1.example.com", "12345", PSW).is_ok());
        assert!(Credentials::new("id1.example.com", "1234567890123", PSW).is_ok());
        assert!(Credentials::new("id1.example.com", "12345678901234", PSW).is_err());
    }
}
