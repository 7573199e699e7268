use crate::domain::{
    error::{DomainError, INVALID_DATA, INVALID_EMAIL, PASSWORD_MISMATCH},
    models::{
        account::{Account, NewAccount},
        registration::RegistrationInput,
    },
    repositories::user_repository::UserRepository,
    services::{email_validator::EmailValidator, password_service::PasswordHasher},
};

pub struct RegisterUserUsecase<E: EmailValidator, P: PasswordHasher, R: UserRepository> {
    email_validator: E,
    password_hasher: P,
    user_repository: R,
}

impl<E: EmailValidator, P: PasswordHasher, R: UserRepository> RegisterUserUsecase<E, P, R> {
    pub fn new(email_validator: E, password_hasher: P, user_repository: R) -> Self {
        Self {
            email_validator,
            password_hasher,
            user_repository,
        }
    }

    /// Register a new account.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// shape, password confirmation, email format, email uniqueness.
    /// Only then is the password hashed and the account persisted.
    #[tracing::instrument(
        name = "RegisterUserUsecase::execute",
        skip(self, input),
        fields(email = %input.email)
    )]
    pub async fn execute(&self, input: RegistrationInput) -> Result<Account, DomainError> {
        if !input.is_complete() {
            tracing::debug!("rejected registration with missing fields");
            return Err(DomainError::invalid_input(INVALID_DATA));
        }

        if input.password != input.password_confirmation {
            tracing::debug!("rejected registration with mismatched confirmation");
            return Err(DomainError::invalid_input(PASSWORD_MISMATCH));
        }

        if !self.email_validator.is_valid_email(&input.email) {
            tracing::debug!("rejected registration with malformed email");
            return Err(DomainError::invalid_input(INVALID_EMAIL));
        }

        // Fast path only: the repository's add() is the authoritative uniqueness check
        if self
            .user_repository
            .find_by_email(&input.email)
            .await?
            .is_some()
        {
            tracing::info!("rejected registration for an existing email");
            return Err(DomainError::Conflict);
        }

        let RegistrationInput {
            name,
            last_name,
            email,
            password,
            ..
        } = input;

        let password = self.password_hasher.hash(&password)?;

        let account = self
            .user_repository
            .add(NewAccount {
                name,
                last_name,
                email,
                password,
            })
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "account write failed");
                DomainError::from(e)
            })?;

        tracing::info!(account_id = %account.id(), "account registered");
        Ok(account)
    }
}
