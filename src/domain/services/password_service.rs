use crate::domain::{error::DomainError, models::password::HashedPassword};

/// One-way transformation of a plaintext secret into its stored form
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError>;
}
