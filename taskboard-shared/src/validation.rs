/// Signup field validation
///
/// The rules are evaluated in a fixed priority order and the first failing
/// rule wins; callers surface the rule's message to the user and re-render
/// the signup form.
///
/// # Rules (in order)
///
/// 1. email length > 4 characters
/// 2. email contains `@`
/// 3. email contains `.`
/// 4. user name length >= 3 characters
/// 5. user name contains no whitespace
/// 6. password matches its confirmation
/// 7. password length >= 7 characters
///
/// # Example
///
/// ```
/// use taskboard_shared::validation::{validate_signup, SignupError, SignupInput};
///
/// let input = SignupInput {
///     email: "a@b.com",
///     user_name: "bob",
///     password1: "secret1",
///     password2: "secret1",
/// };
/// assert!(validate_signup(&input).is_ok());
///
/// let bad = SignupInput { password2: "other", ..input };
/// assert_eq!(validate_signup(&bad), Err(SignupError::PasswordMismatch));
/// ```
use thiserror::Error;

/// A single failed signup rule, carrying its user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Email must be longer than 4 characters")]
    EmailTooShort,

    #[error("Email must contain an @ sign")]
    EmailMissingAt,

    #[error("Email must contain a period")]
    EmailMissingDot,

    #[error("User name must be at least 3 characters long")]
    UserNameTooShort,

    #[error("User name must not contain spaces")]
    UserNameHasWhitespace,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 7 characters long")]
    PasswordTooShort,
}

/// Raw signup form fields, borrowed from the request
#[derive(Debug, Clone, Copy)]
pub struct SignupInput<'a> {
    pub email: &'a str,
    pub user_name: &'a str,
    pub password1: &'a str,
    pub password2: &'a str,
}

/// Validates signup fields, short-circuiting on the first failing rule
///
/// Pure function: no I/O, no side effects. Lengths are counted in characters,
/// not bytes, so multi-byte input is not penalized.
pub fn validate_signup(input: &SignupInput<'_>) -> Result<(), SignupError> {
    if input.email.chars().count() <= 4 {
        return Err(SignupError::EmailTooShort);
    }
    if !input.email.contains('@') {
        return Err(SignupError::EmailMissingAt);
    }
    if !input.email.contains('.') {
        return Err(SignupError::EmailMissingDot);
    }
    if input.user_name.chars().count() < 3 {
        return Err(SignupError::UserNameTooShort);
    }
    if input.user_name.chars().any(char::is_whitespace) {
        return Err(SignupError::UserNameHasWhitespace);
    }
    if input.password1 != input.password2 {
        return Err(SignupError::PasswordMismatch);
    }
    if input.password1.chars().count() < 7 {
        return Err(SignupError::PasswordTooShort);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SignupInput<'static> {
        SignupInput {
            email: "a@b.com",
            user_name: "bob",
            password1: "secret1",
            password2: "secret1",
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(validate_signup(&valid()), Ok(()));
    }

    #[test]
    fn test_email_too_short() {
        let input = SignupInput { email: "a@b.", ..valid() };
        assert_eq!(validate_signup(&input), Err(SignupError::EmailTooShort));
    }

    #[test]
    fn test_email_missing_at() {
        let input = SignupInput { email: "nobody.example.com", ..valid() };
        assert_eq!(validate_signup(&input), Err(SignupError::EmailMissingAt));
    }

    #[test]
    fn test_email_missing_dot() {
        let input = SignupInput { email: "nobody@example", ..valid() };
        assert_eq!(validate_signup(&input), Err(SignupError::EmailMissingDot));
    }

    #[test]
    fn test_user_name_too_short() {
        let input = SignupInput { user_name: "ab", ..valid() };
        assert_eq!(validate_signup(&input), Err(SignupError::UserNameTooShort));
    }

    #[test]
    fn test_user_name_whitespace() {
        let input = SignupInput { user_name: "bob smith", ..valid() };
        assert_eq!(
            validate_signup(&input),
            Err(SignupError::UserNameHasWhitespace)
        );
    }

    #[test]
    fn test_password_mismatch() {
        let input = SignupInput { password2: "secret2", ..valid() };
        assert_eq!(validate_signup(&input), Err(SignupError::PasswordMismatch));
    }

    #[test]
    fn test_password_too_short() {
        let input = SignupInput {
            password1: "secret",
            password2: "secret",
            ..valid()
        };
        assert_eq!(validate_signup(&input), Err(SignupError::PasswordTooShort));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Email and password are both invalid; the email rule fires first.
        let input = SignupInput {
            email: "bad",
            password1: "x",
            password2: "y",
            ..valid()
        };
        assert_eq!(validate_signup(&input), Err(SignupError::EmailTooShort));
    }

    #[test]
    fn test_lengths_are_counted_in_characters() {
        // Four multi-byte characters plus "@." is six characters.
        let input = SignupInput { email: "ää@ä.ä", ..valid() };
        assert_eq!(validate_signup(&input), Ok(()));
    }

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            SignupError::PasswordTooShort.to_string(),
            "Password must be at least 7 characters long"
        );
        assert_eq!(
            SignupError::EmailMissingAt.to_string(),
            "Email must contain an @ sign"
        );
    }
}
