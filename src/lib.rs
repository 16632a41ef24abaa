//! # NOC list client
//!
//! Authenticates against the BADSEC server, derives the request checksum
//! and retrieves the NOC user list.
//!
//! Modules:
//! - `config` — client settings built from the fixed constants
//! - `sources` — the auth and users endpoints
//! - `resilience` — constant-delay retry helper
//! - `helpers` — request checksum
//! - `app` — orchestration and exit code

pub mod app;
pub mod config;
pub mod error;
pub mod helpers;
pub mod resilience;
pub mod sources;
pub mod utils;
#[cfg(test)]
pub mod tests;


pub use crate::config::settings::ClientConfig;
pub use crate::error::FetchError;
