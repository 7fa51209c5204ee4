//! Auth models.

use crate::{
    auth::{AuthError, FieldError},
    uuids::TypedUuid,
};

/// Marker for account identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Account;

/// Account UUID
pub type UserUuid = TypedUuid<Account>;

/// Sign-in form.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Validate the form before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] with one entry per failed field.
    pub fn validate(&self) -> Result<(), AuthError> {
        let mut errors = Vec::new();

        if !is_well_formed_email(self.email.trim()) {
            errors.push(FieldError::new("email", "Invalid email address"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Validation(errors))
        }
    }
}

/// Sign-up form.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Full name of the student.
    pub full_name: String,
    /// Account email.
    pub email: String,
    /// Campus roll number.
    pub roll_number: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub confirm_password: String,
}

impl NewAccount {
    /// Validate the form before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] with one entry per failed field.
    pub fn validate(&self) -> Result<(), AuthError> {
        let mut errors = Vec::new();

        let full_name = self.full_name.trim();

        if full_name.is_empty() {
            errors.push(FieldError::new("full_name", "Full name is required"));
        } else if full_name.chars().count() > 100 {
            errors.push(FieldError::new("full_name", "Full name is too long"));
        }

        let email = self.email.trim();

        if !is_well_formed_email(email) || email.chars().count() > 255 {
            errors.push(FieldError::new("email", "Invalid email address"));
        }

        let roll_number = self.roll_number.trim();

        if roll_number.is_empty() {
            errors.push(FieldError::new("roll_number", "Roll number is required"));
        } else if roll_number.chars().count() > 50 {
            errors.push(FieldError::new("roll_number", "Roll number is too long"));
        }

        if self.password.chars().count() < 6 {
            errors.push(FieldError::new(
                "password",
                "Password must be at least 6 characters",
            ));
        }

        if self.password != self.confirm_password {
            errors.push(FieldError::new("confirm_password", "Passwords don't match"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Validation(errors))
        }
    }
}

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token attached to authenticated requests.
    pub access_token: String,
    /// Account the session belongs to.
    pub user_uuid: UserUuid,
    /// Email the account registered with.
    pub email: Option<String>,
}

fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
