use thiserror::Error;

pub const INVALID_DATA: &str = "Invalid Data";
pub const PASSWORD_MISMATCH: &str = "Password and password confirmation must be equal";
pub const INVALID_EMAIL: &str = "Email is not valid";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing, mismatched or malformed registration data
    #[error("{0}")]
    InvalidInput(String),

    #[error("User already exists")]
    Conflict,

    #[error("Not found")]
    NotFound,

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Hashing error: {0}")]
    Hashing(String),
}

impl DomainError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// HTTP-style status code carried by every error kind
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::Conflict => 400,
            Self::NotFound => 404,
            Self::Persistence(_) | Self::Hashing(_) => 500,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    /// The store rejected the write because the email is already taken
    #[error("Email already registered")]
    Conflict,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => DomainError::NotFound,
            RepositoryError::Conflict => DomainError::Conflict,
            RepositoryError::Database(msg) => DomainError::Persistence(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(DomainError::invalid_input(INVALID_DATA), 400, "Invalid Data")]
    #[case(DomainError::invalid_input(PASSWORD_MISMATCH), 400, PASSWORD_MISMATCH)]
    #[case(DomainError::invalid_input(INVALID_EMAIL), 400, "Email is not valid")]
    #[case(DomainError::Conflict, 400, "User already exists")]
    #[case(DomainError::NotFound, 404, "Not found")]
    #[case(DomainError::Hashing("bad params".to_string()), 500, "Hashing error: bad params")]
    fn test_status_and_message(
        #[case] err: DomainError,
        #[case] status: u16,
        #[case] message: &str,
    ) {
        assert_eq!(err.status_code(), status);
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_repository_conflict_maps_to_user_already_exists() {
        let err: DomainError = RepositoryError::Conflict.into();
        assert_eq!(err, DomainError::Conflict);
        assert_eq!(err.to_string(), "User already exists");
    }

    #[test]
    fn test_database_error_is_internal() {
        let err: DomainError = RepositoryError::Database("connection refused".to_string()).into();
        assert_eq!(err.status_code(), 500);
        assert!(matches!(err, DomainError::Persistence(msg) if msg == "connection refused"));
    }
}
