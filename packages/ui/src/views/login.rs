//! Login screen with email/password form.

use dioxus::prelude::*;
use tracing::warn;

use crate::forms::{LoginForm, LOGIN_FAILED};
use crate::session::{signed_in, use_client, use_session};

use super::common::ErrorBanner;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn LoginView(on_success: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let client = use_client();
    let gate = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let (e, p) = match form.validate() {
            Ok((e, p)) => (e.to_string(), p.to_string()),
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };

        error.set(None);
        loading.set(true);
        let client = client.clone();
        spawn(async move {
            match client.auth().login(&e, &p).await {
                Ok(user) => {
                    signed_in(gate, user);
                    on_success.call(());
                }
                Err(err) => {
                    warn!(error = %err, "login failed");
                    loading.set(false);
                    error.set(Some(err.user_message(LOGIN_FAILED)));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen screen-body centered",
            h1 { "Welcome Back" }
            p { class: "hint", "Sign in to continue your learning journey" }

            form {
                class: "form",
                onsubmit: handle_login,

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "hint",
                "Don't have an account? "
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_register.call(()),
                    "Sign up"
                }
            }
        }
    }
}
