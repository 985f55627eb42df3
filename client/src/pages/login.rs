//! Login / registration page.
//!
//! Renders both forms and wires their submit events to an
//! [`AccessController`]. Everything the page shows is derived from one
//! `RwSignal<AccessState>`, which is also the controller's view.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use super::access_flow::{self, AccessController, AccessView};
use crate::config::EndpointConfig;
use crate::net::api::AuthClient;
use crate::net::transport::FetchTransport;
use crate::state::access::{AccessState, Notice, Tone, ViewState};
use crate::state::forms::{LoginFields, RegisterFields};
use crate::util::browser;

/// [`AccessView`] backed by a Leptos signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalView {
    state: RwSignal<AccessState>,
}

impl AccessView for SignalView {
    fn current(&self) -> AccessState {
        self.state.get_untracked()
    }

    fn render(&self, next: AccessState) {
        self.state.set(next);
    }

    fn navigate(&self, route: &str) {
        browser::navigate_to(route);
    }
}

type PageController = AccessController<FetchTransport, SignalView>;

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

fn notice_class(base: &str, notice: Option<&Notice>) -> String {
    match notice.map(|n| n.tone) {
        Some(Tone::Success) => format!("{base} notice notice--success"),
        Some(Tone::Error) => format!("{base} notice notice--error"),
        None => base.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = RwSignal::new(AccessState::default());
    let login_fields = RwSignal::new(LoginFields::default());
    let register_fields = RwSignal::new(RegisterFields::default());

    let flow: StoredValue<PageController> = StoredValue::new(AccessController::new(
        AuthClient::new(EndpointConfig::from_build_env(), FetchTransport),
        SignalView { state },
    ));

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        let flow = flow.get_value();
        let mut fields = login_fields.get_untracked();
        let credentials = access_flow::begin_login(&ev, &mut fields);
        login_fields.set(fields);
        leptos::task::spawn_local(async move {
            flow.submit_login(credentials).await;
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        let flow = flow.get_value();
        let mut fields = register_fields.get_untracked();
        let registration = access_flow::begin_register(&ev, &mut fields);
        register_fields.set(fields);
        leptos::task::spawn_local(async move {
            flow.submit_register(registration).await;
        });
    };

    let show = move |panel: ViewState| flow.with_value(|f| f.show(panel));

    view! {
        <div class="access-page">
            <div class="container-login" style:display=move || display(state.with(AccessState::login_visible))>
                <h1>"Connexion"</h1>
                <form class="loginform" on:submit=on_login>
                    <input
                        type="text"
                        name="login"
                        placeholder="Nom d'utilisateur"
                        prop:value=move || login_fields.with(|f| f.login.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            login_fields.update(|f| f.login = value);
                        }
                    />
                    <input
                        type="password"
                        name="password"
                        placeholder="Mot de passe"
                        prop:value=move || login_fields.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            login_fields.update(|f| f.password = value);
                        }
                    />
                    <button type="submit">"Se connecter"</button>
                </form>
                <p class=move || state.with(|s| notice_class("error-login", s.login_notice.as_ref()))>
                    {move || state.with(|s| s.login_text().to_owned())}
                </p>
                <a
                    href="#"
                    class="access-switch"
                    on:click=move |ev| {
                        ev.prevent_default();
                        show(ViewState::ShowRegister);
                    }
                >
                    "Créer un compte"
                </a>
            </div>
            <div class="container-register" style:display=move || display(state.with(AccessState::register_visible))>
                <h1>"Inscription"</h1>
                <form class="registerform" on:submit=on_register>
                    <input
                        type="text"
                        name="login"
                        placeholder="Nom d'utilisateur"
                        prop:value=move || register_fields.with(|f| f.login.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            register_fields.update(|f| f.login = value);
                        }
                    />
                    <input
                        type="password"
                        name="password"
                        placeholder="Mot de passe"
                        prop:value=move || register_fields.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            register_fields.update(|f| f.password = value);
                        }
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Adresse e-mail"
                        prop:value=move || register_fields.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            register_fields.update(|f| f.email = value);
                        }
                    />
                    <button type="submit">"Créer le compte"</button>
                </form>
                <a
                    href="#"
                    class="access-switch"
                    on:click=move |ev| {
                        ev.prevent_default();
                        show(ViewState::ShowLogin);
                    }
                >
                    "J'ai déjà un compte"
                </a>
            </div>
            // Outside the register container so the confirmation stays
            // visible once the form is hidden.
            <p class=move || state.with(|s| notice_class("error-register", s.register_notice.as_ref()))>
                {move || state.with(|s| s.register_text().to_owned())}
            </p>
        </div>
    }
}
