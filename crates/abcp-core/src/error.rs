//! Error types for abcp-core

use thiserror::Error;

/// Errors raised while validating credentials at client construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("password must be a 32-character md5 hex digest")]
    PasswordType,

    #[error(
        "host '{0}' is not supported; expected id<digits>.<domain>, e.g. id200.public.api.abcp.ru"
    )]
    UnsupportedHost(String),

    #[error("login '{0}' is not supported; expected a numeric id, an email or an api@ login")]
    UnsupportedLogin(String),
}

/// Errors raised by per-method parameter validation, before any payload
/// is encoded or any request is sent
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("required parameter missing: {0}")]
    Required(String),

    #[error("one of parameters {0} must be supplied")]
    OneOfRequired(String),

    #[error("parameters '{0}' and '{1}' are mutually exclusive")]
    MutuallyExclusive(String, String),

    #[error("invalid parameter '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

impl ParamError {
    /// Shorthand for the common invalid-value case
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
