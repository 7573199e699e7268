use std::fmt;

/// Raw registration data as received from the caller.
///
/// Lives for a single `RegisterUserUsecase::execute` call; the plaintext
/// password never outlives the hashing step.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegistrationInput {
    /// True when every field carries a value
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.password_confirmation,
        ]
        .iter()
        .all(|field| !field.is_empty())
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("password_confirmation", &"[REDACTED]")
            .finish()
    }
}
