use argon2::{
    password_hash::{PasswordHasher as _, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum Argon2ConfigError {
    #[error("Invalid {0} value")]
    InvalidValue(&'static str),

    #[error("Rejected Argon2 parameters: {0}")]
    RejectedParams(String),
}

/// Argon2id password hasher. Hashing runs on the blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    /// Budget VPS friendly: 4 MiB memory, 3 iterations, 1 lane.
    pub const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
    pub const DEFAULT_ITERATIONS: u32 = 3;
    pub const DEFAULT_PARALLELISM: u32 = 1;

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, Argon2ConfigError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| Argon2ConfigError::RejectedParams(e.to_string()))?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    /// Reads `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS` and `ARGON2_PARALLELISM`,
    /// falling back to the budget defaults.
    pub fn from_env() -> Result<Self, Argon2ConfigError> {
        fn read(key: &'static str, default: u32) -> Result<u32, Argon2ConfigError> {
            match std::env::var(key) {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| Argon2ConfigError::InvalidValue(key)),
                Err(_) => Ok(default),
            }
        }

        Self::with_params(
            read("ARGON2_MEMORY_KIB", Self::DEFAULT_MEMORY_KIB)?,
            read("ARGON2_ITERATIONS", Self::DEFAULT_ITERATIONS)?,
            read("ARGON2_PARALLELISM", Self::DEFAULT_PARALLELISM)?,
        )
    }

    #[cfg(test)]
    fn with_fixed_salt(salt: &str) -> Self {
        let mut hasher = Self::with_params(
            Self::DEFAULT_MEMORY_KIB,
            Self::DEFAULT_ITERATIONS,
            Self::DEFAULT_PARALLELISM,
        )
        .unwrap();
        hasher.salt_override = Some(SaltString::from_b64(salt).unwrap());
        hasher
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
