//! Loopback authentication service for exercising the `reqwest` transport.
//!
//! Every request, whatever its path, is recorded and answered with the same
//! canned reply.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tokio::task::JoinHandle;

/// One request as the service saw it.
#[derive(Clone, Debug)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl Captured {
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone, Debug)]
pub struct Canned {
    status: StatusCode,
    body: &'static str,
    set_cookie: Option<&'static str>,
}

impl Canned {
    pub fn new(status: u16, body: &'static str) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        Self { status, body, set_cookie: None }
    }

    pub fn with_cookie(mut self, cookie: &'static str) -> Self {
        self.set_cookie = Some(cookie);
        self
    }
}

impl IntoResponse for Canned {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(cookie) = self.set_cookie {
            response
                .headers_mut()
                .insert(header::SET_COOKIE, HeaderValue::from_static(cookie));
        }
        response
    }
}

#[derive(Clone)]
struct Shared {
    reply: Canned,
    seen: Arc<Mutex<Vec<Captured>>>,
}

pub struct TestService {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Captured>>>,
    task: JoinHandle<()>,
}

impl TestService {
    pub async fn start(reply: Canned) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .fallback(record)
            .with_state(Shared { reply, seen: Arc::clone(&seen) });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { base_url, seen, task }
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.seen.lock().unwrap().clone()
    }

    /// The single request received, failing the test if there were more.
    pub fn only_request(&self) -> Captured {
        let mut seen = self.requests();
        assert_eq!(seen.len(), 1, "expected exactly one request, got {seen:?}");
        seen.remove(0)
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Base URL of a port nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    format!("http://{}", listener.local_addr().unwrap())
}

async fn record(State(shared): State<Shared>, method: Method, uri: Uri, headers: HeaderMap, body: String) -> Canned {
    let captured = Captured { method, path: uri.path().to_owned(), headers, body };
    shared.seen.lock().unwrap().push(captured);
    shared.reply
}
