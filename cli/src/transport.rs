//! `reqwest` transport with a one-slot session cookie jar.
//!
//! The service identifies a session by a `token` cookie. The jar is seeded
//! from the command line and refreshed from every `Set-Cookie: token=...`
//! reply header, so a login followed by `save`/`load` in one process keeps
//! its session.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Mutex;

use client::net::error::TransportError;
use client::net::transport::AuthTransport;
use client::net::types::{JSON_CONTENT_TYPE, Method, OutboundRequest, ServerReply};
use reqwest::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};

pub const SESSION_COOKIE: &str = "token";

pub struct ReqwestTransport {
    http: reqwest::Client,
    session: Mutex<Option<String>>,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(session_token: Option<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        let session = session_token.filter(|t| !t.is_empty());
        Ok(Self { http, session: Mutex::new(session) })
    }

    /// Token of the current session, if any.
    pub fn session_token(&self) -> Option<String> {
        self.session.lock().ok().and_then(|s| s.clone())
    }

    fn remember(&self, token: String) {
        if let Ok(mut slot) = self.session.lock() {
            // An empty value is the service expiring the cookie on logout.
            *slot = (!token.is_empty()).then_some(token);
        }
    }
}

/// Extract the session token from one `Set-Cookie` header value.
pub fn session_token_from_set_cookie(header: &str) -> Option<String> {
    let pair = header.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    (name.trim() == SESSION_COOKIE).then(|| value.trim().to_owned())
}

#[async_trait::async_trait(?Send)]
impl AuthTransport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<ServerReply, TransportError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut builder = self.http.request(method, &request.url);
        if let Some(token) = self.session_token() {
            builder = builder.header(COOKIE, format!("{SESSION_COOKIE}={token}"));
        }
        if let Some(body) = request.json_body {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        let response = builder.send().await.map_err(|e| TransportError::new(e.to_string()))?;
        let status = response.status().as_u16();
        let issued = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find_map(session_token_from_set_cookie);
        if let Some(token) = issued {
            self.remember(token);
        }
        let body = response.text().await.map_err(|e| TransportError::new(e.to_string()))?;

        tracing::debug!(status, bytes = body.len(), "reply received");
        Ok(ServerReply { status, body })
    }
}
