//! Request dispatcher
//!
//! `Abcp` holds validated credentials and a transport, composes the wire
//! payload with the authentication pairs and routes the raw response
//! through the classifier. Administrative paths are refused client-side
//! for non-admin credentials before any I/O.

use std::time::Duration;

use abcp_core::{methods, Credentials, WirePayload};
use serde_json::Value;
use tracing::{debug, warn};

use crate::api;
use crate::error::AbcpError;
use crate::response::classify;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// ABCP API client
///
/// # Example
///
/// ```ignore
/// use abcp_client::Abcp;
///
/// let abcp = Abcp::new(
///     "id200.public.api.abcp.ru",
///     "api@id200",
///     "61c0cd30306ab9fbcef92d8a3bd1a4cb",
/// )?;
/// let orders = abcp.admin().orders().status_history(4243900).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Abcp<T: HttpTransport = ReqwestTransport> {
    credentials: Credentials,
    transport: T,
}

impl Abcp<ReqwestTransport> {
    /// Validate credentials and build a client with the default transport
    ///
    /// # Errors
    ///
    /// Returns the credential validation error, or `Network` if the TLS
    /// backend fails to initialize.
    pub fn new(
        host: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AbcpError> {
        Self::with_timeout(host, login, password, DEFAULT_TIMEOUT, None)
    }

    /// Like [`Abcp::new`] with an explicit timeout and connection-pool cap
    pub fn with_timeout(
        host: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
        connections_limit: Option<usize>,
    ) -> Result<Self, AbcpError> {
        let credentials = Credentials::new(host, login, password)?;
        let transport = ReqwestTransport::new(timeout, connections_limit)
            .map_err(|e| AbcpError::Network(e.to_string()))?;
        Ok(Self {
            credentials,
            transport,
        })
    }
}

impl<T: HttpTransport> Abcp<T> {
    /// Build a client over a custom transport (tests, instrumentation)
    pub fn with_transport(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Administrative (`cp/`) endpoint groups
    pub fn admin(&self) -> api::admin::Admin<'_, T> {
        api::admin::Admin::new(self)
    }

    /// Client-tier endpoint groups
    pub fn client(&self) -> api::client::Client<'_, T> {
        api::client::Client::new(self)
    }

    /// Newer (`ts/`) API, client tier
    pub fn ts(&self) -> api::ts::TsClient<'_, T> {
        api::ts::TsClient::new(self)
    }

    /// Newer (`cp/ts/`) API, administrative tier
    pub fn ts_admin(&self) -> api::ts_admin::TsAdmin<'_, T> {
        api::ts_admin::TsAdmin::new(self)
    }

    /// Send one request and classify the response
    ///
    /// GET sends the payload as query parameters, POST as a
    /// form-urlencoded body. The `userlogin`/`userpsw` authentication
    /// pairs are appended here so endpoint methods never handle
    /// credentials.
    ///
    /// # Errors
    ///
    /// `NotEnoughRights` for admin paths under client credentials (no
    /// request is sent), `Network` for transport failures, and the
    /// classifier's errors for remote failures.
    pub async fn request(
        &self,
        method: &str,
        payload: WirePayload,
        post: bool,
    ) -> Result<Value, AbcpError> {
        if methods::is_admin_path(method) && !self.credentials.is_admin() {
            return Err(AbcpError::NotEnoughRights(method.to_string()));
        }

        let mut pairs = payload;
        pairs.push(("userlogin".to_string(), self.credentials.login().to_string()));
        pairs.push(("userpsw".to_string(), self.credentials.password().to_string()));

        let url = format!("https://{}/{}", self.credentials.host(), method);
        debug!(method, post, params = pairs.len(), "abcp request");

        let raw = self
            .transport
            .send(&url, &pairs, post)
            .await
            .map_err(|e| AbcpError::Network(e.to_string()))?;
        debug!(method, status = raw.status, "abcp response");

        let result = classify(method, &raw.content_type, raw.status, &raw.body);
        if let Err(AbcpError::Network(reason)) = &result {
            warn!(method, status = raw.status, "unusable response: {reason}");
        }
        result
    }
}
