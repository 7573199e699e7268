use validator::ValidateEmail;

use crate::domain::services::email_validator::EmailValidator;

/// HTML5 / RFC 5322 style address check backed by the `validator` crate
#[derive(Clone, Default)]
pub struct StandardEmailValidator;

impl StandardEmailValidator {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for StandardEmailValidator {
    fn is_valid_email(&self, candidate: &str) -> bool {
        candidate.validate_email()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("test@gmail.com", true)]
    #[case("first.last+tag@sub.example.co", true)]
    #[case("test.com", false)]
    #[case("@example.com", false)]
    #[case("test@", false)]
    #[case("", false)]
    #[case("two@@example.com", false)]
    fn test_is_valid_email(#[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(StandardEmailValidator::new().is_valid_email(candidate), expected);
    }
}
