//! What the access screen currently displays.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never mutates the page directly. It derives the next
//! [`AccessState`] from the current one plus a submission outcome and hands
//! it to the view's single `render` function.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::error::SubmitError;

pub const WELCOME_MESSAGE: &str = "Bienvenue !";
pub const ACCOUNT_CREATED_MESSAGE: &str = "Le compte a été créé !";

/// Which panel of the screen is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    ShowLogin,
    ShowRegister,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Feedback text shown under a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Error }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccessState {
    pub view: ViewState,
    /// Content of the `.error-login` element.
    pub login_notice: Option<Notice>,
    /// Content of the `.error-register` element.
    pub register_notice: Option<Notice>,
}

impl AccessState {
    pub fn showing(view: ViewState) -> Self {
        Self { view, ..Self::default() }
    }

    pub fn login_visible(&self) -> bool {
        self.view == ViewState::ShowLogin
    }

    pub fn register_visible(&self) -> bool {
        self.view == ViewState::ShowRegister
    }

    pub fn login_text(&self) -> &str {
        self.login_notice.as_ref().map_or("", |n| n.text.as_str())
    }

    pub fn register_text(&self) -> &str {
        self.register_notice.as_ref().map_or("", |n| n.text.as_str())
    }

    /// Switch panels. Notices are kept.
    #[must_use]
    pub fn switched_to(self, view: ViewState) -> Self {
        Self { view, ..self }
    }

    /// Apply the outcome of a login submission.
    ///
    /// The panel never changes here; on success the caller navigates away.
    #[must_use]
    pub fn after_login(self, outcome: &Result<String, SubmitError>) -> Self {
        let notice = match outcome {
            Ok(_) => Notice::success(WELCOME_MESSAGE),
            Err(e) => Notice::error(e.user_message()),
        };
        Self { login_notice: Some(notice), ..self }
    }

    /// Apply the outcome of a registration submission.
    ///
    /// Success reveals the login panel; failure leaves the registration
    /// form where it is.
    #[must_use]
    pub fn after_register(self, outcome: &Result<String, SubmitError>) -> Self {
        match outcome {
            Ok(_) => Self {
                view: ViewState::ShowLogin,
                register_notice: Some(Notice::success(ACCOUNT_CREATED_MESSAGE)),
                ..self
            },
            Err(e) => Self { register_notice: Some(Notice::error(e.user_message())), ..self },
        }
    }
}
