//! Live input values of the login and registration forms.
//!
//! Taking credentials out of a form empties it in the same step, so the
//! inputs are already blank while the request is still in flight.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Credentials, Registration};

/// Inputs `login` and `password` of `.loginform`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub login: String,
    pub password: String,
}

impl LoginFields {
    /// Move the current values out as [`Credentials`], leaving both inputs empty.
    pub fn take_credentials(&mut self) -> Credentials {
        Credentials {
            username: std::mem::take(&mut self.login),
            password: std::mem::take(&mut self.password),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.login.is_empty() && self.password.is_empty()
    }
}

/// Inputs `login`, `password` and `email` of `.registerform`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub login: String,
    pub password: String,
    pub email: String,
}

impl RegisterFields {
    /// Move the current values out as a [`Registration`], leaving all inputs empty.
    pub fn take_registration(&mut self) -> Registration {
        Registration {
            username: std::mem::take(&mut self.login),
            password: std::mem::take(&mut self.password),
            email: std::mem::take(&mut self.email),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.login.is_empty() && self.password.is_empty() && self.email.is_empty()
    }
}
