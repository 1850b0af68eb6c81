//! Field validation for the login and signup forms.
//!
//! All checks are synchronous and purely client-side. Uniqueness checks
//! (username/email already taken) belong to the backend and are not done here.

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank
    Required(Field),
    /// Password is shorter than the minimum length
    TooShort { min: usize },
    /// Email does not look like local@domain.tld
    InvalidEmail,
    /// Confirmation does not match the password
    Mismatch,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required(Field::Username) => write!(f, "Username is required."),
            ValidationError::Required(Field::Email) => write!(f, "Email is required."),
            ValidationError::Required(Field::Password) => write!(f, "Password is required."),
            ValidationError::Required(Field::ConfirmPassword) => {
                write!(f, "Please confirm your password.")
            }
            ValidationError::TooShort { min } => {
                write!(f, "Password must be at least {} characters.", min)
            }
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email."),
            ValidationError::Mismatch => write!(f, "Passwords do not match."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validation errors for the login form, one slot per field.
///
/// Empty slots mean the field is valid; `is_empty` means the form can submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub username: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Validation errors for the signup form, one slot per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub username: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub confirm_password: Option<ValidationError>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

/// Username must be non-empty after trimming.
pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(Field::Username))
    } else {
        Ok(())
    }
}

/// Email must be non-empty after trimming and shaped like `local@domain.tld`.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(Field::Email))
    } else if !is_valid_email(trimmed) {
        Err(ValidationError::InvalidEmail)
    } else {
        Ok(())
    }
}

/// Password must be non-empty and at least [`MIN_PASSWORD_LENGTH`] characters.
/// Passwords are never trimmed; leading/trailing spaces are significant.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required(Field::Password))
    } else if value.chars().count() < MIN_PASSWORD_LENGTH {
        Err(ValidationError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    } else {
        Ok(())
    }
}

/// Confirmation must be non-empty and equal to the password byte-for-byte.
pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if confirmation.is_empty() {
        Err(ValidationError::Required(Field::ConfirmPassword))
    } else if confirmation != password {
        Err(ValidationError::Mismatch)
    } else {
        Ok(())
    }
}

/// Validate every login field at once, collecting all errors.
pub fn validate_login(username: &str, password: &str) -> LoginErrors {
    LoginErrors {
        username: validate_username(username).err(),
        password: validate_password(password).err(),
    }
}

/// Validate every signup field at once, collecting all errors.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> SignupErrors {
    SignupErrors {
        username: validate_username(username).err(),
        email: validate_email(email).err(),
        password: validate_password(password).err(),
        confirm_password: validate_confirmation(password, confirm_password).err(),
    }
}

/// Checks the `local@domain.tld` shape: exactly one `@`, a dot somewhere in
/// the domain with non-empty segments around it, and no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_login_yields_exactly_the_required_errors() {
        let errors = validate_login("", "");
        assert_eq!(
            errors.username,
            Some(ValidationError::Required(Field::Username))
        );
        assert_eq!(
            errors.password,
            Some(ValidationError::Required(Field::Password))
        );
    }

    #[test]
    fn empty_signup_yields_exactly_the_required_errors() {
        let errors = validate_signup("", "", "", "");
        assert_eq!(
            errors.username,
            Some(ValidationError::Required(Field::Username))
        );
        assert_eq!(errors.email, Some(ValidationError::Required(Field::Email)));
        assert_eq!(
            errors.password,
            Some(ValidationError::Required(Field::Password))
        );
        assert_eq!(
            errors.confirm_password,
            Some(ValidationError::Required(Field::ConfirmPassword))
        );
    }

    #[test]
    fn whitespace_only_username_is_required() {
        assert_eq!(
            validate_username("   "),
            Err(ValidationError::Required(Field::Username))
        );
        assert!(validate_username("bob").is_ok());
        assert!(validate_username("  bob  ").is_ok());
    }

    #[test]
    fn short_password_fails_regardless_of_other_fields() {
        let errors = validate_signup("bob", "bob@x.com", "abc1234", "abc1234");
        assert_eq!(errors.password, Some(ValidationError::TooShort { min: 8 }));

        // Exactly at the minimum is accepted
        assert!(validate_password("abcd1234").is_ok());
        assert_eq!(
            validate_password("abcd123"),
            Err(ValidationError::TooShort { min: 8 })
        );
    }

    #[test]
    fn confirm_mismatch_fails_even_when_both_are_valid_passwords() {
        let errors = validate_signup("bob", "bob@x.com", "longenough1", "longenough2");
        assert!(errors.password.is_none());
        assert_eq!(errors.confirm_password, Some(ValidationError::Mismatch));
    }

    #[test]
    fn empty_confirmation_is_required_not_mismatch() {
        assert_eq!(
            validate_confirmation("longenough1", ""),
            Err(ValidationError::Required(Field::ConfirmPassword))
        );
    }

    #[test]
    fn invalid_emails_are_rejected() {
        for value in [
            "plainaddress",
            "no-domain@",
            "@no-local.com",
            "missing-tld@domain",
            "trailing-dot@domain.",
            "leading-dot@.com",
            "two@@signs.com",
            "has space@domain.com",
            "has@dom ain.com",
        ] {
            assert_eq!(
                validate_email(value),
                Err(ValidationError::InvalidEmail),
                "expected {:?} to be rejected",
                value
            );
        }
    }

    #[test]
    fn valid_emails_are_accepted() {
        for value in ["bob@x.com", "a.b@sub.domain.org", "user+tag@mail.co"] {
            assert!(
                validate_email(value).is_ok(),
                "expected {:?} to be accepted",
                value
            );
        }
    }

    #[test]
    fn email_is_trimmed_before_checking() {
        assert!(validate_email("  bob@x.com  ").is_ok());
        assert_eq!(
            validate_email("   "),
            Err(ValidationError::Required(Field::Email))
        );
    }

    #[test]
    fn empty_username_with_short_password_reports_both() {
        // {username: "", password: "abc"} -> {username: required, password: length}
        let errors = validate_login("", "abc");
        assert_eq!(
            errors.username,
            Some(ValidationError::Required(Field::Username))
        );
        assert_eq!(errors.password, Some(ValidationError::TooShort { min: 8 }));
        assert!(!errors.is_empty());
    }

    #[test]
    fn fully_valid_signup_has_no_errors() {
        let errors = validate_signup("bob", "bob@x.com", "longenough1", "longenough1");
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn passwords_are_not_trimmed() {
        // Spaces count toward length and must match exactly
        assert!(validate_password("pass word").is_ok());
        assert_eq!(
            validate_confirmation("password ", "password"),
            Err(ValidationError::Mismatch)
        );
    }

    #[test]
    fn error_messages_match_the_form_copy() {
        assert_eq!(
            ValidationError::Required(Field::Username).to_string(),
            "Username is required."
        );
        assert_eq!(
            ValidationError::Required(Field::Email).to_string(),
            "Email is required."
        );
        assert_eq!(
            ValidationError::Required(Field::Password).to_string(),
            "Password is required."
        );
        assert_eq!(
            ValidationError::Required(Field::ConfirmPassword).to_string(),
            "Please confirm your password."
        );
        assert_eq!(
            ValidationError::TooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters."
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email."
        );
        assert_eq!(
            ValidationError::Mismatch.to_string(),
            "Passwords do not match."
        );
    }
}
