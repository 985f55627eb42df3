//! Login / registration submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! A submit is split in two halves. The synchronous half runs inside the
//! event handler: cancel the browser's default navigation and take (and so
//! clear) the form values. The asynchronous half sends the request, folds
//! the outcome into the view state that is current *when the reply arrives*,
//! and renders it. Overlapping submissions are not guarded or ordered.
//!
//! The flow only talks to the page through [`AccessView`] and to the network
//! through [`AuthTransport`], so the same controller drives the Leptos page,
//! the terminal front end, and the tests.

#[cfg(test)]
#[path = "access_flow_test.rs"]
mod access_flow_test;

use crate::net::api::AuthClient;
use crate::net::transport::AuthTransport;
use crate::net::types::{Credentials, Registration};
use crate::state::access::{AccessState, ViewState};
use crate::state::forms::{LoginFields, RegisterFields};

/// A form submit event whose default navigation can be cancelled.
pub trait FormSubmit {
    fn cancel_navigation(&self);
}

impl FormSubmit for leptos::ev::SubmitEvent {
    fn cancel_navigation(&self) {
        self.prevent_default();
    }
}

/// The screen as seen by the controller.
pub trait AccessView {
    /// State currently on screen.
    fn current(&self) -> AccessState;

    /// Replace what is on screen with `next`. The only way state changes.
    fn render(&self, next: AccessState);

    /// Leave the screen for `route`.
    fn navigate(&self, route: &str);
}

/// Synchronous half of a login submit.
pub fn begin_login(event: &impl FormSubmit, fields: &mut LoginFields) -> Credentials {
    event.cancel_navigation();
    fields.take_credentials()
}

/// Synchronous half of a registration submit.
pub fn begin_register(event: &impl FormSubmit, fields: &mut RegisterFields) -> Registration {
    event.cancel_navigation();
    fields.take_registration()
}

#[derive(Clone, Debug)]
pub struct AccessController<T, V> {
    client: AuthClient<T>,
    view: V,
}

impl<T: AuthTransport, V: AccessView> AccessController<T, V> {
    pub fn new(client: AuthClient<T>, view: V) -> Self {
        Self { client, view }
    }

    pub fn client(&self) -> &AuthClient<T> {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Send `credentials`, render the outcome, and go to the chat route on
    /// success.
    pub async fn submit_login(&self, credentials: Credentials) {
        log::debug!("login submitted for {:?}", credentials.username);
        let outcome = self.client.login(&credentials).await;
        if let Err(e) = &outcome {
            log::warn!("login failed: {e}");
        }
        self.view.render(self.view.current().after_login(&outcome));
        if outcome.is_ok() {
            self.view.navigate(&self.client.config().chat_route);
        }
    }

    /// Send `registration` and render the outcome. Success switches to the
    /// login panel.
    pub async fn submit_register(&self, registration: Registration) {
        log::debug!("registration submitted for {:?}", registration.username);
        let outcome = self.client.register(&registration).await;
        if let Err(e) = &outcome {
            log::warn!("registration failed: {e}");
        }
        self.view.render(self.view.current().after_register(&outcome));
    }

    pub fn show(&self, panel: ViewState) {
        self.view.render(self.view.current().switched_to(panel));
    }
}
