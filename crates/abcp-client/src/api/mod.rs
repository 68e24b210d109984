//! Endpoint method surface
//!
//! Thin typed wrappers over the method registry, grouped the way the
//! platform documentation groups them. Each method validates its own
//! parameters, builds its payload explicitly and hands it to the
//! dispatcher; dates are normalized here, never inside the encoder.

pub mod admin;
pub mod client;
pub mod ts;
pub mod ts_admin;
