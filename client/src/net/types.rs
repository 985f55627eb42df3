//! Wire types for the authentication service.
//!
//! DESIGN
//! ======
//! Request bodies serialize to the exact field names the service decodes
//! (`username`, `password`, `email`). Replies are never parsed: the body is
//! opaque text meant for a human.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content type sent with every JSON request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Login payload for `POST /login`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account creation payload for `POST /register`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One HTTP request as handed to an [`AuthTransport`](super::transport::AuthTransport).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    /// Serialized JSON body. Sent with `Content-Type: application/json`.
    pub json_body: Option<String>,
}

impl OutboundRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), json_body: None }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self { method: Method::Post, url: url.into(), json_body: None }
    }

    /// Build a `POST` carrying `payload` as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `payload` cannot be encoded.
    pub fn post_json<T: Serialize>(url: impl Into<String>, payload: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(payload)?;
        Ok(Self { method: Method::Post, url: url.into(), json_body: Some(body) })
    }
}

/// Status code plus raw text body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerReply {
    pub status: u16,
    pub body: String,
}

impl ServerReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// The service signals success with exactly `200`; any other status,
    /// including other 2xx codes, is a rejection.
    pub fn is_accepted(&self) -> bool {
        self.status == 200
    }
}
