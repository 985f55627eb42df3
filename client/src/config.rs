//! Endpoint configuration for the authentication service.
//!
//! DESIGN
//! ======
//! All URLs and routes the screen touches are injected through
//! [`EndpointConfig`] instead of being spelled inline, so tests and the CLI
//! can point the same controller at a different host.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";
pub const DEFAULT_CHAT_ROUTE: &str = "/pages/chat/";

pub const BASE_URL_KEY: &str = "PORTAL_API_BASE_URL";
pub const CHAT_ROUTE_KEY: &str = "PORTAL_CHAT_ROUTE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
    pub login_path: String,
    pub register_path: String,
    pub logout_path: String,
    pub save_path: String,
    pub load_path: String,
    /// Page route the browser is sent to after a successful login.
    pub chat_route: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            login_path: "/login".to_owned(),
            register_path: "/register".to_owned(),
            logout_path: "/logout".to_owned(),
            save_path: "/save".to_owned(),
            load_path: "/load".to_owned(),
            chat_route: DEFAULT_CHAT_ROUTE.to_owned(),
        }
    }
}

impl EndpointConfig {
    /// Build a config from a key lookup.
    ///
    /// Recognized keys:
    /// - `PORTAL_API_BASE_URL`: service origin, trailing `/` trimmed
    /// - `PORTAL_CHAT_ROUTE`: post-login redirect route
    ///
    /// Missing or blank values keep the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = non_blank(lookup(BASE_URL_KEY)) {
            config = config.with_base_url(&base_url);
        }
        if let Some(route) = non_blank(lookup(CHAT_ROUTE_KEY)) {
            config.chat_route = route;
        }
        config
    }

    /// Build a config from values baked in at compile time.
    ///
    /// The browser has no process environment, so overrides are read when
    /// the WASM bundle is built.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            BASE_URL_KEY => option_env!("PORTAL_API_BASE_URL").map(str::to_owned),
            CHAT_ROUTE_KEY => option_env!("PORTAL_CHAT_ROUTE").map(str::to_owned),
            _ => None,
        })
    }

    /// Replace the service origin, dropping any trailing slash.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        base_url.trim().trim_end_matches('/').clone_into(&mut self.base_url);
        self
    }

    #[must_use]
    pub fn with_chat_route(mut self, route: &str) -> Self {
        route.clone_into(&mut self.chat_route);
        self
    }

    pub fn login_url(&self) -> String {
        self.endpoint(&self.login_path)
    }

    pub fn register_url(&self) -> String {
        self.endpoint(&self.register_path)
    }

    pub fn logout_url(&self) -> String {
        self.endpoint(&self.logout_path)
    }

    pub fn save_url(&self) -> String {
        self.endpoint(&self.save_path)
    }

    pub fn load_url(&self) -> String {
        self.endpoint(&self.load_path)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
