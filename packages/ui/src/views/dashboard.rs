use api::Goal;
use dioxus::prelude::*;

use crate::dashboard::Summary;
use crate::session::{check_auth, use_client, use_session};

use super::common::{ErrorBanner, LoadingView, ScreenHeader};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Home screen: the user's goals and a few totals.
///
/// Fetches on mount. The router remounts it whenever it becomes the visible route,
/// so goals created elsewhere show up on return.
#[component]
pub fn DashboardView(
    on_new_goal: EventHandler<()>,
    on_open_goal: EventHandler<String>,
    on_chat: EventHandler<()>,
    on_settings: EventHandler<()>,
) -> Element {
    let client = use_client();
    let gate = use_session();

    let goals = use_resource(move || {
        let client = client.clone();
        async move { check_auth(client.goals().list().await, &client, gate).await }
    });

    let email = gate()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "User".to_string());

    let body = match &*goals.read() {
        None => rsx! { LoadingView {} },
        Some(Err(e)) => rsx! {
            div {
                class: "screen-body",
                ErrorBanner { message: e.user_message("Failed to load goals.") }
            }
        },
        Some(Ok(list)) => match Summary::of(list) {
            Summary::Empty => rsx! {
                div {
                    class: "screen-body centered",
                    h2 { "No Goals Yet" }
                    p {
                        class: "hint",
                        "Start your learning journey by creating your first goal. We'll generate a personalized daily plan for you!"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_new_goal.call(()),
                        "Create Your First Goal"
                    }
                }
            },
            Summary::Populated(stats) => rsx! {
                div {
                    class: "screen-body",
                    div {
                        class: "row",
                        h2 { "Your Goals" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| on_new_goal.call(()),
                            "New Goal"
                        }
                    }
                    for goal in list.iter() {
                        GoalCard { key: "{goal.id}", goal: goal.clone(), on_open: on_open_goal }
                    }
                    div {
                        class: "stats",
                        div {
                            class: "card",
                            div { class: "stat-value", "{stats.active_goals}" }
                            div { class: "stat-label", "Active Goals" }
                        }
                        div {
                            class: "card",
                            div { class: "stat-value", "{stats.total_days}" }
                            div { class: "stat-label", "Total Days" }
                        }
                        div {
                            class: "card",
                            div { class: "stat-value", "{stats.longest_goal}" }
                            div { class: "stat-label", "Longest Goal" }
                        }
                    }
                }
            },
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen",
            ScreenHeader {
                title: "Welcome back, {email}",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_chat.call(()),
                    "Chat"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_settings.call(()),
                    "Settings"
                }
            }
            {body}
        }
    }
}

#[component]
fn GoalCard(goal: Goal, on_open: EventHandler<String>) -> Element {
    let start = goal.start_date.format("%b %-d, %Y").to_string();
    let id = goal.id.clone();
    rsx! {
        div {
            class: "card",
            h3 { "{goal.title}" }
            p { class: "hint", "{goal.total_days} days · starts {start}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_open.call(id.clone()),
                "View Calendar"
            }
        }
    }
}
