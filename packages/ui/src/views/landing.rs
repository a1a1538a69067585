use dioxus::prelude::*;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Welcome screen shown to signed-out users.
#[component]
pub fn LandingView(on_get_started: EventHandler<()>, on_sign_in: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen screen-body centered",
            h1 { "Goal Achiever" }
            p {
                class: "hint",
                "Daily plans for DSA, system design and GenAI, with an AI tutor when you get stuck."
            }
            div {
                class: "form",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_get_started.call(()),
                    "Get Started"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_sign_in.call(()),
                    "Sign In"
                }
            }
        }
    }
}
