/// Why configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
    #[error(transparent)]
    Env(#[from] envy::Error),
}

/// Loads service configuration from the process environment.
///
/// Implementors derive `serde::Deserialize`; field names map to upper-case
/// environment variables (`database_url` ← `DATABASE_URL`). A `.env` file in
/// the working directory, when present, is applied first without overriding
/// variables that are already set.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn try_from_env() -> Result<Self, ConfigError> {
        ignore_missing(dotenvy::dotenv())?;
        Ok(envy::from_env()?)
    }

    /// # Panics
    ///
    /// Panics if a required variable is missing, cannot be deserialized, or
    /// the `.env` file is malformed. Intended for process start-up only.
    fn from_env() -> Self {
        Self::try_from_env().unwrap_or_else(|e| panic!("failed to load config from environment: {e}"))
    }
}

/// An absent `.env` file is fine; an unreadable or malformed one is not.
fn ignore_missing<T>(loaded: dotenvy::Result<T>) -> Result<(), ConfigError> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
