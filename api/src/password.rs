//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings, so verification reads its cost
//! parameters from the stored hash and only hashing consults
//! [`PasswordConfig`]. Both operations are CPU bound and run on the blocking
//! pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::{config::PasswordConfig, error::AppError};

fn hasher(config: PasswordConfig) -> Result<Argon2<'static>, AppError> {
    let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
        .map_err(argon2::password_hash::Error::from)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

pub async fn hash_password(password: String, config: PasswordConfig) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = hasher(config)?
            .hash_password(password.as_bytes(), &salt)?
            .to_string();
        Ok(hash)
    })
    .await?
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(&password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await?
}
