use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{
        error::{DomainError, INVALID_DATA},
        models::{
            account::{Account, AccountId},
            registration::RegistrationInput,
        },
        repositories::user_repository::UserRepository,
        services::{email_validator::EmailValidator, password_service::PasswordHasher},
    },
    usecase::{get_account_usecase::GetAccountUsecase, register_user_usecase::RegisterUserUsecase},
};

// Request

/// json for register request
///
/// Absent and null fields become empty strings and are rejected by the usecase.
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl From<RegisterRequest> for RegistrationInput {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name.unwrap_or_default(),
            last_name: request.last_name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            password: request.password.unwrap_or_default(),
            password_confirmation: request.password_confirmation.unwrap_or_default(),
        }
    }
}

// Response

/// json for account response, never carries the password hash
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id().to_string(),
            name: account.name().to_string(),
            last_name: account.last_name().to_string(),
            email: account.email().to_string(),
            created_at: account.created_at(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: u16,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            message,
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router
pub fn create_user_router<E, P, R>(
    register_service: RegisterUserUsecase<E, P, R>,
    account_service: GetAccountUsecase<R>,
) -> Router
where
    E: EmailValidator + 'static,
    P: PasswordHasher + 'static,
    R: UserRepository + 'static,
{
    let state = AppState {
        register_service: Arc::new(register_service),
        account_service: Arc::new(account_service),
    };

    Router::new()
        .route("/users", post(register::<E, P, R>))
        .route("/users/{id}", get(get_account::<E, P, R>))
        .with_state(state)
}

pub struct AppState<E: EmailValidator, P: PasswordHasher, R: UserRepository> {
    pub register_service: Arc<RegisterUserUsecase<E, P, R>>,
    pub account_service: Arc<GetAccountUsecase<R>>,
}

impl<E: EmailValidator, P: PasswordHasher, R: UserRepository> Clone for AppState<E, P, R> {
    fn clone(&self) -> Self {
        Self {
            register_service: self.register_service.clone(),
            account_service: self.account_service.clone(),
        }
    }
}

// handler function

/// handler function for register
async fn register<E, P, R>(
    State(state): State<AppState<E, P, R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), DomainError>
where
    E: EmailValidator + 'static,
    P: PasswordHasher + 'static,
    R: UserRepository + 'static,
{
    // malformed bodies, wrong field types and missing content type are all bad data
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected unreadable register body");
        DomainError::invalid_input(INVALID_DATA)
    })?;

    let account = state.register_service.execute(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

/// handler function for account lookup
async fn get_account<E, P, R>(
    State(state): State<AppState<E, P, R>>,
    Path(id): Path<String>,
) -> Result<Json<AccountResponse>, DomainError>
where
    E: EmailValidator + 'static,
    P: PasswordHasher + 'static,
    R: UserRepository + 'static,
{
    // a malformed id cannot name an account
    let id = Uuid::parse_str(&id).map_err(|_| DomainError::NotFound)?;
    let account = state
        .account_service
        .execute(&AccountId::from_uuid(id))
        .await?;
    Ok(Json(account.into()))
}
