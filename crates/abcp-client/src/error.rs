//! Error taxonomy for ABCP API calls
//!
//! Every failure surfaces to the caller of the endpoint method; nothing
//! is retried or downgraded internally. Construction-time problems come
//! from `abcp-core` and convert via `#[from]`.

use abcp_core::{CredentialsError, ParamError};
use thiserror::Error;

/// Errors an ABCP API call can produce
#[derive(Debug, Error)]
pub enum AbcpError {
    /// Bad host/login/password shape, raised at client construction
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// Per-method parameter validation failure, raised before encoding
    #[error(transparent)]
    Parameter(#[from] ParamError),

    /// Non-admin credentials used against an administrative path; raised
    /// client-side, no request is sent
    #[error("not enough rights to call '{0}'")]
    NotEnoughRights(String),

    /// Transport failure, unexpected content type or undecodable body
    #[error("network error: {0}")]
    Network(String),

    /// Remote API error, structured (`errorMessage`/`errorCode`) when the
    /// server provides it, raw body otherwise
    #[error("{message} {} [{status}]", .code.as_deref().unwrap_or("-"))]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// 404 from a search-family method: the lookup found nothing
    #[error("{message} {} [{status}]", .code.as_deref().unwrap_or("-"))]
    NotFound {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// RFC 2324, section 2.3.2
    #[error("418 I'm a teapot")]
    Teapot,
}
