use super::*;

#[test]
fn take_credentials_moves_values_and_clears_inputs() {
    let mut fields = LoginFields { login: "alice".to_owned(), password: "pw".to_owned() };
    let creds = fields.take_credentials();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.password, "pw");
    assert!(fields.is_blank());
}

#[test]
fn take_credentials_from_empty_form_sends_empty_strings() {
    let mut fields = LoginFields::default();
    assert_eq!(fields.take_credentials(), Credentials::default());
}

#[test]
fn take_credentials_keeps_whitespace() {
    let mut fields = LoginFields { login: " alice ".to_owned(), password: " ".to_owned() };
    let creds = fields.take_credentials();
    assert_eq!(creds.username, " alice ");
    assert_eq!(creds.password, " ");
}

#[test]
fn take_registration_moves_all_three_fields() {
    let mut fields = RegisterFields {
        login: "bob".to_owned(),
        password: "pw".to_owned(),
        email: "not-an-email".to_owned(),
    };
    let reg = fields.take_registration();
    assert_eq!(reg.username, "bob");
    assert_eq!(reg.password, "pw");
    assert_eq!(reg.email, "not-an-email");
    assert!(fields.is_blank());
}
