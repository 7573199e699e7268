use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, Schema, SqlErr,
};

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            account::{Account, AccountId, NewAccount},
            password::HashedPassword,
        },
        repositories::user_repository::UserRepository,
    },
    infrastructure::entity::accounts,
};

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Create the accounts table (with its unique email index) if it does not exist
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);
        let mut table = schema.create_table_from_entity(accounts::Entity);
        table.if_not_exists();

        self.db
            .execute(backend.build(&table))
            .await
            .map_err(database_error)?;
        Ok(())
    }
}

fn database_error(e: DbErr) -> RepositoryError {
    tracing::error!(error = %e, "database call failed");
    RepositoryError::Database(e.to_string())
}

fn to_domain(model: accounts::Model) -> Account {
    Account::new(
        AccountId::from_uuid(model.id),
        NewAccount {
            name: model.name,
            last_name: model.last_name,
            email: model.email,
            password: HashedPassword::new(model.password_hash),
        },
        model.created_at,
    )
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(name = "PostgresUserRepository::add", skip_all)]
    async fn add(&self, candidate: NewAccount) -> Result<Account, RepositoryError> {
        let account_model = accounts::ActiveModel {
            id: Set(AccountId::new().as_uuid().to_owned()),
            name: Set(candidate.name),
            last_name: Set(candidate.last_name),
            email: Set(candidate.email),
            password_hash: Set(candidate.password.into_string()),
            created_at: Set(Utc::now()),
        };

        let model = account_model.insert(&*self.db).await.map_err(|e| {
            // The unique index on email is the authoritative duplicate check
            if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                RepositoryError::Conflict
            } else {
                database_error(e)
            }
        })?;

        Ok(to_domain(model))
    }

    #[tracing::instrument(name = "PostgresUserRepository::find_by_id", skip(self))]
    async fn find_by_id(&self, id: &AccountId) -> Result<Account, RepositoryError> {
        accounts::Entity::find_by_id(*id.as_uuid())
            .one(&*self.db)
            .await
            .map_err(database_error)?
            .map(to_domain)
            .ok_or(RepositoryError::NotFound)
    }

    #[tracing::instrument(name = "PostgresUserRepository::find_by_email", skip_all)]
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        let account = accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(database_error)?;

        Ok(account.map(to_domain))
    }
}
