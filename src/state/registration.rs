//! Registration form state: three independently editable text fields.
//!
//! DESIGN
//! ======
//! Setters store input verbatim. No trimming, case folding, or validation
//! happens here or anywhere downstream; the harness sends exactly what was
//! typed so the endpoint's own handling can be observed.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::types::RegistrationPayload;

/// Current contents of the username, email, and password controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    username: String,
    email: String,
    password: String,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Snapshot the fields into the wire payload, adding the fixed name literals.
    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload::new(&self.username, &self.email, &self.password)
    }
}
