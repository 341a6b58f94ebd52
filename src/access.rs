//! Registration gate in front of the materials list and the quiz.
//!
//! Registration performs format validation only. There is no identity
//! backend; a successful submission flips a single in-memory flag for the
//! rest of the session. The [`CredentialCheck`] trait is the seam where a
//! real backend could be plugged in without touching the quiz engine.

use log::debug;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Registration form payload.
#[derive(Debug, Validate)]
pub struct Registration {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Registration was rejected by validation. No state changed.
#[derive(Debug, Error)]
#[error("registration rejected: {0}")]
pub struct RegistrationError(pub ValidationErrors);

impl From<ValidationErrors> for RegistrationError {
    fn from(errors: ValidationErrors) -> Self {
        Self(errors)
    }
}

impl RegistrationError {
    /// First field message, in form order, for the dialog's error line.
    pub fn first_message(&self) -> String {
        let fields = self.0.field_errors();
        for field in ["name", "email", "password"] {
            if let Some(errors) = fields.get(field) {
                if let Some(error) = errors.first() {
                    return match &error.message {
                        Some(message) => message.clone().into_owned(),
                        None => format!("{field} is invalid"),
                    };
                }
            }
        }
        "registration is invalid".to_string()
    }
}

/// Decides whether a registration attempt is acceptable.
pub trait CredentialCheck {
    fn check(&self, registration: &Registration) -> Result<(), RegistrationError>;
}

/// Format-only validation: non-empty name and password, well-formed email.
#[derive(Debug, Default)]
pub struct FormatCheck;

impl CredentialCheck for FormatCheck {
    fn check(&self, registration: &Registration) -> Result<(), RegistrationError> {
        registration.validate().map_err(RegistrationError::from)
    }
}

/// Holds the session's single `registered` flag.
///
/// The flag starts false, is set by the first successful [`register`] call
/// and is never cleared for the lifetime of the session.
///
/// [`register`]: AccessGate::register
pub struct AccessGate {
    registered: bool,
    check: Box<dyn CredentialCheck>,
}

impl AccessGate {
    pub fn new() -> Self {
        Self::with_check(Box::new(FormatCheck))
    }

    pub fn with_check(check: Box<dyn CredentialCheck>) -> Self {
        Self {
            registered: false,
            check,
        }
    }

    /// Validate the form and open the gate. Registering again after success
    /// is an observable no-op.
    pub fn register(&mut self, registration: &Registration) -> Result<(), RegistrationError> {
        self.check.check(registration)?;
        if !self.registered {
            self.registered = true;
            debug!("registration accepted for {}", registration.email);
        }
        Ok(())
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new()
    }
}
