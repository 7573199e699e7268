/// Decides whether a string is a well-formed email address.
///
/// Malformed input yields `false`; implementations never fail.
pub trait EmailValidator: Send + Sync {
    fn is_valid_email(&self, candidate: &str) -> bool;
}
