//! Admin password storage for the setup wizard.
//!
//! Stored form is `<salt>$<sha256 hex>` with a per-record random salt.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Hash a plain password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{salt}${}", digest_with_salt(&salt, password))
}

/// Check a candidate password against a stored `<salt>$<digest>` value.
/// Malformed stored values never match.
pub fn verify_password(stored: &str, candidate: &str) -> bool {
    match stored.split_once('$') {
        Some((salt, digest)) => digest_with_salt(salt, candidate) == digest,
        None => false,
    }
}

fn digest_with_salt(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
