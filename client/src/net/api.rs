//! Typed calls to the authentication service.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, SubmitError>`. A reply is accepted only
//! with status `200`; anything else becomes [`SubmitError::Rejected`] with
//! the body kept verbatim for display.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::error::SubmitError;
use super::transport::AuthTransport;
use super::types::{Credentials, OutboundRequest, Registration};
use crate::config::EndpointConfig;

/// Authentication service client over an injected transport.
#[derive(Clone, Debug)]
pub struct AuthClient<T> {
    config: Arc<EndpointConfig>,
    transport: T,
}

impl<T: AuthTransport> AuthClient<T> {
    pub fn new(config: EndpointConfig, transport: T) -> Self {
        Self { config: Arc::new(config), transport }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `POST /login` with `{username, password}`.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Rejected`] on a non-200 reply,
    /// [`SubmitError::NetworkUnavailable`] when no reply arrives.
    pub async fn login(&self, credentials: &Credentials) -> Result<String, SubmitError> {
        let request = OutboundRequest::post_json(self.config.login_url(), credentials)?;
        self.exchange(request).await
    }

    /// `POST /register` with `{username, password, email}`.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::login`].
    pub async fn register(&self, registration: &Registration) -> Result<String, SubmitError> {
        let request = OutboundRequest::post_json(self.config.register_url(), registration)?;
        self.exchange(request).await
    }

    /// `GET /logout`. Ends the session identified by the `token` cookie.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::login`]; a missing session is a rejection.
    pub async fn logout(&self) -> Result<String, SubmitError> {
        self.exchange(OutboundRequest::get(self.config.logout_url())).await
    }

    /// `POST /save`. Stores `document` for the session user and returns the
    /// copy the service echoes back.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::login`], plus [`SubmitError::Json`] when the
    /// echo is not valid JSON.
    pub async fn save_data(&self, document: &serde_json::Value) -> Result<serde_json::Value, SubmitError> {
        let request = OutboundRequest::post_json(self.config.save_url(), document)?;
        let echoed = self.exchange(request).await?;
        Ok(serde_json::from_str(&echoed)?)
    }

    /// `POST /load`. Fetches the document stored for the session user.
    ///
    /// # Errors
    ///
    /// Same as [`AuthClient::save_data`].
    pub async fn load_data(&self) -> Result<serde_json::Value, SubmitError> {
        let stored = self.exchange(OutboundRequest::post(self.config.load_url())).await?;
        Ok(serde_json::from_str(&stored)?)
    }

    async fn exchange(&self, request: OutboundRequest) -> Result<String, SubmitError> {
        let reply = self.transport.send(request).await?;
        if !reply.is_accepted() {
            return Err(SubmitError::Rejected { status: reply.status, body: reply.body });
        }
        Ok(reply.body)
    }
}
