use argon2::{
    Argon2,
    password_hash::{PasswordHasher as Argon2Hasher, SaltString, rand_core::OsRng},
};

use crate::domain::{
    error::DomainError,
    models::password::HashedPassword,
    services::password_service::PasswordHasher,
};

/// Salted Argon2id hashing, output in PHC string format
#[derive(Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
        let salt = SaltString::generate(OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|e| DomainError::Hashing(e.to_string()))?
            .to_string();

        Ok(HashedPassword::new(hash))
    }
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};

    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hasher = Argon2PasswordHasher::new();

        let hashed = hasher.hash("123456").unwrap();

        assert_ne!(hashed.as_str(), "123456");
        assert!(hashed.as_str().starts_with("$argon2id$"));
        let parsed = PasswordHash::new(hashed.as_str()).unwrap();
        assert!(Argon2::default().verify_password(b"123456", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"654321", &parsed).is_err());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = Argon2PasswordHasher::new();

        let first = hasher.hash("123456").unwrap();
        let second = hasher.hash("123456").unwrap();

        assert_ne!(first, second);
    }
}
