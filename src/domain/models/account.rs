use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::password::HashedPassword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(Uuid);
impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Candidate handed to the repository: registration data with the password already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: HashedPassword,
}

/// Persisted account. The id and creation time are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: String,
    last_name: String,
    email: String,
    password: HashedPassword,
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(id: AccountId, candidate: NewAccount, created_at: DateTime<Utc>) -> Self {
        let NewAccount {
            name,
            last_name,
            email,
            password,
        } = candidate;
        Self {
            id,
            name,
            last_name,
            email,
            password,
            created_at,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn password(&self) -> &HashedPassword {
        &self.password
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
