use super::*;
use crate::net::error::{NETWORK_UNAVAILABLE_MESSAGE, TransportError};

fn rejected(status: u16, body: &str) -> Result<String, SubmitError> {
    Err(SubmitError::Rejected { status, body: body.to_owned() })
}

fn offline() -> Result<String, SubmitError> {
    Err(SubmitError::from(TransportError::new("offline")))
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_shows_login_without_notices() {
    let state = AccessState::default();
    assert_eq!(state.view, ViewState::ShowLogin);
    assert!(state.login_visible());
    assert!(!state.register_visible());
    assert_eq!(state.login_text(), "");
    assert_eq!(state.register_text(), "");
}

#[test]
fn view_state_default_is_login() {
    assert_eq!(ViewState::default(), ViewState::ShowLogin);
}

// =============================================================
// Login transitions
// =============================================================

#[test]
fn login_success_shows_welcome_not_server_body() {
    let state = AccessState::default().after_login(&Ok("OK".to_owned()));
    assert_eq!(state.login_text(), WELCOME_MESSAGE);
    assert_eq!(state.login_notice.unwrap().tone, Tone::Success);
}

#[test]
fn login_rejection_shows_body_and_keeps_panel() {
    let state = AccessState::default().after_login(&rejected(401, "Invalid credentials"));
    assert_eq!(state.login_text(), "Invalid credentials");
    assert!(state.login_notice.as_ref().unwrap().is_error());
    assert_eq!(state.view, ViewState::ShowLogin);
}

#[test]
fn login_outcome_leaves_register_notice_alone() {
    let state = AccessState {
        register_notice: Some(Notice::success(ACCOUNT_CREATED_MESSAGE)),
        ..AccessState::default()
    }
    .after_login(&rejected(401, "Unauthorized"));
    assert_eq!(state.register_text(), ACCOUNT_CREATED_MESSAGE);
}

#[test]
fn login_network_failure_shows_fixed_message() {
    let state = AccessState::default().after_login(&offline());
    assert_eq!(state.login_text(), NETWORK_UNAVAILABLE_MESSAGE);
}

// =============================================================
// Register transitions
// =============================================================

#[test]
fn register_success_reveals_login_panel() {
    let state = AccessState::showing(ViewState::ShowRegister).after_register(&Ok("OK".to_owned()));
    assert_eq!(state.register_text(), ACCOUNT_CREATED_MESSAGE);
    assert!(state.login_visible());
    assert!(!state.register_visible());
}

#[test]
fn register_rejection_keeps_register_panel() {
    let state = AccessState::showing(ViewState::ShowRegister).after_register(&rejected(400, "Email already used"));
    assert_eq!(state.register_text(), "Email already used");
    assert!(state.register_visible());
}

#[test]
fn register_network_failure_keeps_register_panel() {
    let state = AccessState::showing(ViewState::ShowRegister).after_register(&offline());
    assert_eq!(state.register_text(), NETWORK_UNAVAILABLE_MESSAGE);
    assert!(state.register_visible());
}

// =============================================================
// Panel switching
// =============================================================

#[test]
fn switching_panels_keeps_notices() {
    let state = AccessState::default()
        .after_login(&rejected(401, "Unauthorized"))
        .switched_to(ViewState::ShowRegister);
    assert!(state.register_visible());
    assert_eq!(state.login_text(), "Unauthorized");
}
