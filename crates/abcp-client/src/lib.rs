//! # abcp-client
//!
//! Async HTTP client for the ABCP car-parts platform API.
//!
//! This crate provides:
//! - The request dispatcher (`Abcp`) with client-side admin-path guarding
//! - The response classifier mapping status/content-type to typed errors
//! - A transport seam (`HttpTransport`) with a reqwest implementation
//! - Typed endpoint wrappers for the admin, client and ts API families
//!
//! ## Example
//!
//! ```ignore
//! use abcp_client::Abcp;
//!
//! let abcp = Abcp::new(
//!     "id200.public.api.abcp.ru",
//!     "api@id200",
//!     "61c0cd30306ab9fbcef92d8a3bd1a4cb",
//! )?;
//!
//! let statuses = abcp.admin().statuses().list().await?;
//! let offers = abcp.client().search().articles("333305", "Kyb", None, None, None).await?;
//! ```
//!
//! Credentials validate at construction; every call returns the decoded
//! JSON body (`serde_json::Value`: array, object or bool depending on the
//! endpoint) or one `AbcpError`.

pub mod api;
mod client;
mod error;
mod response;
mod transport;

pub use client::{Abcp, DEFAULT_TIMEOUT};
pub use error::AbcpError;
pub use response::classify;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport, TransportError};

// The pure core re-exported for payload construction at call sites.
pub use abcp_core as core;
