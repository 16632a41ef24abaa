use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `token` immediately followed by `path`.
pub fn request_checksum(token: &str, path: &str) -> String {
    let mut h = Sha256::new();
    h.update(token.as_bytes());
    h.update(path.as_bytes());
    hex::encode(h.finalize())
}
