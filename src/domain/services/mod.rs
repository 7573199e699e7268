pub mod email_validator;
pub mod password_service;
