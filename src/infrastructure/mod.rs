pub mod argon2_password_hasher;
pub mod email_validator;
pub mod entity;
pub mod in_memory_user_repository;
pub mod user_repository;
