use thiserror::Error;

/// Errors raised while provisioning an account
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Error from the user store
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    /// Error from the password hasher
    #[error("Password hash error: {0}")]
    PasswordHash(String),

    /// The blocking hashing task panicked or was cancelled
    #[error("Hashing task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl From<argon2::password_hash::Error> for ProvisionError {
    fn from(error: argon2::password_hash::Error) -> Self {
        ProvisionError::PasswordHash(error.to_string())
    }
}

/// Type alias for Result with ProvisionError
pub type Result<T> = std::result::Result<T, ProvisionError>;
