//! Terminal rendering of the access screen.
//!
//! Each render prints only the notices that changed: successes to stdout,
//! errors to stderr. Navigation is reported instead of performed.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::sync::Mutex;

use client::pages::access_flow::AccessView;
use client::state::access::{AccessState, Notice, Tone, ViewState};

#[derive(Default)]
pub struct TerminalView {
    state: Mutex<AccessState>,
    redirect: Mutex<Option<String>>,
}

impl TerminalView {
    pub fn showing(view: ViewState) -> Self {
        Self { state: Mutex::new(AccessState::showing(view)), ..Self::default() }
    }

    /// Route the screen asked to navigate to, if any.
    pub fn redirect(&self) -> Option<String> {
        self.redirect.lock().ok().and_then(|r| r.clone())
    }

    /// Whether any notice currently on screen is an error.
    pub fn has_error(&self) -> bool {
        let state = self.current();
        [&state.login_notice, &state.register_notice]
            .into_iter()
            .flatten()
            .any(Notice::is_error)
    }
}

/// Notices present in `next` that differ from `previous`.
pub fn changed_notices<'a>(previous: &AccessState, next: &'a AccessState) -> Vec<&'a Notice> {
    [
        (&previous.login_notice, &next.login_notice),
        (&previous.register_notice, &next.register_notice),
    ]
    .into_iter()
    .filter(|(before, after)| before != after)
    .filter_map(|(_, after)| after.as_ref())
    .collect()
}

impl AccessView for TerminalView {
    fn current(&self) -> AccessState {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn render(&self, next: AccessState) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        for notice in changed_notices(&state, &next) {
            match notice.tone {
                Tone::Success => println!("{}", notice.text),
                Tone::Error => eprintln!("{}", notice.text),
            }
        }
        *state = next;
    }

    fn navigate(&self, route: &str) {
        println!("redirect: {route}");
        if let Ok(mut redirect) = self.redirect.lock() {
            *redirect = Some(route.to_owned());
        }
    }
}
