use crate::domain::{
    error::DomainError,
    models::account::{Account, AccountId},
    repositories::user_repository::UserRepository,
};

pub struct GetAccountUsecase<R: UserRepository> {
    user_repository: R,
}

impl<R: UserRepository> GetAccountUsecase<R> {
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "GetAccountUsecase::execute", skip(self))]
    pub async fn execute(&self, id: &AccountId) -> Result<Account, DomainError> {
        Ok(self.user_repository.find_by_id(id).await?)
    }
}
