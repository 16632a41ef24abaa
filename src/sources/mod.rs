/// Sources module
///
/// The two BADSEC endpoints, called in order: `auth` issues the token,
/// `users` returns the NOC list for a checksum derived from it.

pub mod auth;
pub mod users;

pub use auth::{fetch_auth_token, AuthToken};
pub use users::{fetch_user_ids, parse_user_ids};
