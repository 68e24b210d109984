//! # abcp-core
//!
//! Pure, I/O-free core of the ABCP API client.
//!
//! This crate provides:
//! - Credential validation and the admin/client privilege tiers
//! - The wire-format payload encoder (camelization, bracket notation,
//!   composite parameter templates)
//! - The method path registry
//! - Date formatting for the two API generations and shared parameter
//!   checks
//!
//! ## Example
//!
//! ```
//! use abcp_core::{Credentials, Payload};
//!
//! let creds = Credentials::new(
//!     "id1.public.api.abcp.ru",
//!     "12345678",
//!     "61c0cd30306ab9fbcef92d8a3bd1a4cb",
//! )?;
//! assert!(!creds.is_admin());
//!
//! let wire = Payload::new().field("user_id", 17).encode();
//! assert_eq!(wire[0].0, "userId");
//! # Ok::<(), abcp_core::CredentialsError>(())
//! ```

pub mod credentials;
pub mod datetime;
pub mod error;
pub mod fields;
pub mod methods;
pub mod payload;

pub use credentials::{Credentials, ADMIN_LOGIN_PREFIX};
pub use error::{CredentialsError, ParamError};
pub use payload::{camelize, Composite, Pairs, Payload, PriceUpRow, PriceUpValue, WirePayload};
