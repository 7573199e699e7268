pub mod get_account_usecase;
pub mod register_user_usecase;
