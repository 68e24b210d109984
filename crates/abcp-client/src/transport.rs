//! HTTP transport seam
//!
//! The dispatcher only needs one capability: send GET/POST with a flat
//! set of pairs and hand back status, content type and body text. The
//! trait keeps the dispatcher testable with an in-memory transport;
//! `ReqwestTransport` is the production implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use thiserror::Error;

/// Failure inside the transport (connect, TLS, timeout, body read)
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Raw response triple handed to the classifier
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// Media type with parameters stripped, e.g. `application/json`
    pub content_type: String,
    pub body: String,
}

/// The single capability the dispatcher requires of a transport
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the pairs as a form body (`post == true`) or query string
    async fn send(
        &self,
        url: &str,
        pairs: &[(String, String)],
        post: bool,
    ) -> Result<RawResponse, TransportError>;
}

/// Production transport backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given request timeout and an optional
    /// cap on idle pooled connections per host
    pub fn new(
        timeout: Duration,
        connections_limit: Option<usize>,
    ) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().timeout(timeout);
        if let Some(limit) = connections_limit {
            builder = builder.pool_max_idle_per_host(limit);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        pairs: &[(String, String)],
        post: bool,
    ) -> Result<RawResponse, TransportError> {
        let request = if post {
            self.client.post(url).form(pairs)
        } else {
            self.client.get(url).query(pairs)
        };
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .unwrap_or("")
            .trim()
            .to_string();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
