use api::Focus;
use dioxus::prelude::*;
use tracing::warn;

use crate::session::{check_auth, use_client, use_session};
use crate::wizard::{GoalWizard, CREATE_FAILED, DURATION_PRESETS, STEPS};

use super::common::{ErrorBanner, ScreenHeader};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Four-step goal creation wizard. `on_created` receives the new goal's id.
#[component]
pub fn NewGoalView(on_created: EventHandler<String>, on_cancel: EventHandler<()>) -> Element {
    let client = use_client();
    let gate = use_session();
    let mut wizard = use_signal(GoalWizard::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |_: MouseEvent| {
        if submitting() {
            return;
        }
        let request = match wizard.read().to_request() {
            Ok(req) => req,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);
        let client = client.clone();
        spawn(async move {
            match check_auth(client.goals().create(&request).await, &client, gate).await {
                Ok(goal) => on_created.call(goal.id),
                Err(e) => {
                    warn!(error = %e, "goal creation failed");
                    submitting.set(false);
                    error.set(Some(e.user_message(CREATE_FAILED)));
                }
            }
        });
    };

    let handle_next = move |_: MouseEvent| {
        let advanced = wizard.write().next();
        if advanced {
            error.set(None);
        } else if let Err(e) = wizard.read().check_step() {
            error.set(Some(e.to_string()));
        }
    };

    let w = wizard.read().clone();
    let step = w.step();

    let step_body = match step {
        1 => rsx! {
            h2 { "What's your goal?" }
            p { class: "hint", "Give it a name you'll recognize every day." }
            input {
                r#type: "text",
                placeholder: "e.g. Land a senior engineer role",
                value: "{w.title}",
                oninput: move |evt: FormEvent| wizard.write().title = evt.value(),
            }
        },
        2 => rsx! {
            h2 { "How long?" }
            div {
                class: "row",
                for days in DURATION_PRESETS {
                    button {
                        class: if w.days.trim() == days.to_string() { "chip active" } else { "chip" },
                        onclick: move |_| wizard.write().set_days(days),
                        "{days} days"
                    }
                }
            }
            input {
                r#type: "number",
                min: "1",
                max: "365",
                value: "{w.days}",
                oninput: move |evt: FormEvent| wizard.write().days = evt.value(),
            }
            label { class: "hint", "Start date (optional, defaults to today)" }
            input {
                r#type: "date",
                value: "{w.start_date}",
                oninput: move |evt: FormEvent| wizard.write().start_date = evt.value(),
            }
        },
        3 => rsx! {
            h2 { "Focus areas" }
            for focus in Focus::ALL {
                FocusOption {
                    focus: focus,
                    selected: w.is_selected(focus),
                    on_toggle: move |f: Focus| wizard.write().toggle_focus(f),
                }
            }
        },
        _ => rsx! {
            h2 { "Almost there" }
            label {
                class: "row",
                input {
                    r#type: "checkbox",
                    checked: w.use_ai,
                    onchange: move |evt: FormEvent| wizard.write().use_ai = evt.checked(),
                }
                "Use AI to generate a personalized plan"
            }
            div {
                class: "card",
                p { "Goal: {w.title.trim()}" }
                p { "Duration: {w.days.trim()} days" }
                p {
                    "Focus: "
                    {w.focuses().iter().map(|f| f.label()).collect::<Vec<_>>().join(", ")}
                }
                p { if w.use_ai { "Plan: AI-Enhanced" } else { "Plan: Standard" } }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen",
            ScreenHeader {
                title: "New Goal",
                on_back: on_cancel,
                div {
                    class: "steps",
                    for i in 1..=STEPS {
                        div { class: if i <= step { "step-dot done" } else { "step-dot" } }
                    }
                }
            }
            div {
                class: "screen-body",
                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }
                {step_body}
                div {
                    class: "row",
                    if step > 1 {
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| {
                                error.set(None);
                                wizard.write().back();
                            },
                            "Back"
                        }
                    }
                    if w.is_last_step() {
                        button {
                            class: "btn btn-primary",
                            disabled: submitting(),
                            onclick: handle_submit,
                            if submitting() { "Creating..." } else { "Create Goal" }
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            disabled: !w.can_proceed(),
                            onclick: handle_next,
                            "Next"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FocusOption(focus: Focus, selected: bool, on_toggle: EventHandler<Focus>) -> Element {
    rsx! {
        button {
            class: if selected { "card chip active" } else { "card chip" },
            onclick: move |_| on_toggle.call(focus),
            strong { "{focus.label()}" }
            p { class: "hint", "{focus.description()}" }
        }
    }
}
