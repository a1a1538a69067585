use dioxus::prelude::*;
use ui::views::{LandingView, LoginView, RegisterView};

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();
    rsx! {
        LandingView {
            on_get_started: move |_| {
                nav.push(Route::Register {});
            },
            on_sign_in: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            // Replace, so back does not return to the form
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_register: move |_| {
                nav.replace(Route::Register {});
            },
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    rsx! {
        RegisterView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_login: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
