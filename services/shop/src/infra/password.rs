//! Argon2id credential hashing.
//!
//! Digests are PHC strings, so the salt and cost parameters travel with the
//! hash and verification works across parameter changes. Both operations run
//! on the blocking pool.

use std::sync::Arc;

use anyhow::{Context as _, anyhow};
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::repository::PasswordHasherPort;
use crate::error::ShopServiceError;

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    decoy_digest: Arc<str>,
}

impl Argon2Hasher {
    /// Memory cost is in KiB. Hashes the decoy digest once, synchronously.
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> anyhow::Result<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| anyhow!("invalid argon2 parameters: {e}"))?;
        let salt = SaltString::generate(&mut OsRng);
        let decoy_digest = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
            .hash_password(salt.as_str().as_bytes(), &salt)
            .map_err(|e| anyhow!("hash decoy digest: {e}"))?
            .to_string();
        Ok(Self {
            params,
            decoy_digest: decoy_digest.into(),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasherPort for Argon2Hasher {
    async fn hash(&self, raw: &str) -> Result<String, ShopServiceError> {
        let argon2 = self.argon2();
        let raw = raw.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(raw.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| anyhow!("hash password: {e}"))
        })
        .await
        .context("join password hashing task")
        .and_then(|result| result)
        .map_err(ShopServiceError::PasswordHash)
    }

    async fn verify(&self, raw: &str, digest: &str) -> Result<bool, ShopServiceError> {
        let argon2 = self.argon2();
        let raw = raw.to_owned();
        let digest = digest.to_owned();
        tokio::task::spawn_blocking(move || -> anyhow::Result<bool> {
            let parsed = PasswordHash::new(&digest).map_err(|e| anyhow!("parse digest: {e}"))?;
            match argon2.verify_password(raw.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(argon2::password_hash::Error::Password) => Ok(false),
                Err(e) => Err(anyhow!("verify password: {e}")),
            }
        })
        .await
        .context("join password verification task")
        .and_then(|result| result)
        .map_err(ShopServiceError::PasswordHash)
    }

    fn decoy_digest(&self) -> &str {
        &self.decoy_digest
    }
}
