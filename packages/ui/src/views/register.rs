//! Registration screen with email/password form.

use dioxus::prelude::*;
use tracing::warn;

use crate::forms::{password_requirements, RegisterForm, REGISTER_FAILED};
use crate::session::{signed_in, use_client, use_session};

use super::common::ErrorBanner;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn RegisterView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let client = use_client();
    let gate = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let form = RegisterForm {
            email: email(),
            password: password(),
            confirm: confirm(),
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
            match client.auth().register(&e, &p).await {
                Ok(user) => {
                    signed_in(gate, user);
                    on_success.call(());
                }
                Err(err) => {
                    warn!(error = %err, "registration failed");
                    loading.set(false);
                    error.set(Some(err.user_message(REGISTER_FAILED)));
                }
            }
        });
    };

    let requirements = password_requirements(&password());

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen screen-body centered",
            h1 { "Create Account" }
            p { class: "hint", "Start achieving your learning goals today" }

            form {
                class: "form",
                onsubmit: handle_register,

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
                if !password().is_empty() {
                    ul {
                        for req in requirements {
                            li {
                                class: if req.met { "hint met" } else { "hint" },
                                "{req.label}"
                            }
                        }
                    }
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm(),
                    oninput: move |evt: FormEvent| confirm.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create Account" }
                }
            }

            p {
                class: "hint",
                "Already have an account? "
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
