use dioxus::prelude::*;

#[component]
pub fn LoadingView(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "screen-body centered",
            p { class: "hint", "{label}" }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error", "{message}" }
    }
}

/// Header bar with an optional back action and trailing actions.
#[component]
pub fn ScreenHeader(
    title: String,
    #[props(default)] on_back: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    rsx! {
        header {
            class: "screen-header",
            div {
                class: "row",
                if let Some(on_back) = on_back {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| on_back.call(()),
                        "Back"
                    }
                }
                h1 { "{title}" }
            }
            div { class: "row", {children} }
        }
    }
}
