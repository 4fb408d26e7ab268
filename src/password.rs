//! Argon2 password hashing.
//!
//! Hashing is CPU-bound, so both directions run on the blocking pool.

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHash, SaltString},
};
use tracing::warn;

use crate::error::Result;

/// Hash `password` with a fresh random salt, returning the PHC string.
pub async fn hash_password(password: String) -> Result<String> {
    let hash = tokio::task::spawn_blocking(move || -> Result<String> {
        let salt = SaltString::generate(rand::thread_rng());
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    })
    .await??;

    Ok(hash)
}

/// Check `password` against a stored PHC string.
///
/// A malformed stored hash counts as a mismatch.
pub async fn verify_password(stored_hash: String, password: String) -> Result<bool> {
    let matches = tokio::task::spawn_blocking(move || -> Result<bool> {
        let hash = match PasswordHash::new(&stored_hash) {
            Ok(hash) => hash,
            Err(err) => {
                warn!(?err, "invalid stored password hash");
                return Ok(false);
            }
        };

        match Argon2::default().verify_password(password.as_bytes(), &hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(err.into()),
        }
    })
    .await??;

    Ok(matches)
}
