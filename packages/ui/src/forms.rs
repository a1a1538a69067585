//! Local validation for the login and registration forms.
//!
//! Both forms are checked before any network call; a failed check yields a
//! [`FormError`] whose message is shown inline.

use std::fmt;

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    PasswordTooShort,
    PasswordMismatch,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            FormError::MissingFields => "Please fill in all fields",
            FormError::PasswordTooShort => "Password must be at least 8 characters long",
            FormError::PasswordMismatch => "Passwords do not match",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Login input. The email is trimmed; the password is taken as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(&str, &str), FormError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok((email, &self.password))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(&str, &str), FormError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() || self.confirm.is_empty() {
            return Err(FormError::MissingFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if self.password != self.confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok((email, &self.password))
    }
}

/// One row of the password checklist under the register form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub label: &'static str,
    pub met: bool,
}

/// Hints only: uppercase and digit are shown but never enforced.
pub fn password_requirements(password: &str) -> [Requirement; 3] {
    [
        Requirement {
            label: "At least 8 characters",
            met: password.chars().count() >= MIN_PASSWORD_LEN,
        },
        Requirement {
            label: "One uppercase letter",
            met: password.chars().any(|c| c.is_ascii_uppercase()),
        },
        Requirement {
            label: "One number",
            met: password.chars().any(|c| c.is_ascii_digit()),
        },
    ]
}
