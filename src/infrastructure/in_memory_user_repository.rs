use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    error::RepositoryError,
    models::account::{Account, AccountId, NewAccount},
    repositories::user_repository::UserRepository,
};

#[derive(Default)]
struct Accounts {
    by_id: HashMap<AccountId, Account>,
    // email -> id
    by_email: HashMap<String, AccountId>,
}

/// Process-local repository. Clones share the same storage.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    accounts: Arc<RwLock<Accounts>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.accounts.read().await.by_id.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, candidate: NewAccount) -> Result<Account, RepositoryError> {
        // Check and insert under one write lock so an email is stored at most once
        let mut accounts = self.accounts.write().await;
        if accounts.by_email.contains_key(&candidate.email) {
            return Err(RepositoryError::Conflict);
        }

        let id = AccountId::new();
        let account = Account::new(id, candidate, Utc::now());
        accounts.by_email.insert(account.email().to_string(), id);
        accounts.by_id.insert(id, account.clone());

        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Account, RepositoryError> {
        self.accounts
            .read()
            .await
            .by_id
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned())
    }
}
