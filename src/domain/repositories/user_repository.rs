use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::account::{Account, AccountId, NewAccount},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and assign its id.
    ///
    /// Fails with `RepositoryError::Conflict` when the store already holds the
    /// email, `RepositoryError::Database` when it is unreachable.
    async fn add(&self, candidate: NewAccount) -> Result<Account, RepositoryError>;

    /// Fails with `RepositoryError::NotFound` when no account has this id
    async fn find_by_id(&self, id: &AccountId) -> Result<Account, RepositoryError>;

    /// `Ok(None)` when the email is not registered
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;
}
