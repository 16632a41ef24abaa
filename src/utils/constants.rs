//! Shared constants and invariants

use http::HeaderName;

pub const BASE_URL: &str = "http://localhost:8888";
pub const AUTH_PATH: &str = "/auth";
pub const USERS_PATH: &str = "/users";

pub const AUTH_TOKEN_HEADER: HeaderName = HeaderName::from_static("badsec-authentication-token");
pub const CHECKSUM_HEADER: HeaderName = HeaderName::from_static("x-request-checksum");

// Retry policy, constant delay between attempts
pub const MAX_ATTEMPTS: u32 = 3;
pub const RETRY_DELAY_MS: u64 = 1000;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
