use api::models::parse_date;
use api::{ApiError, DayPlan, Note};
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::markdown;
use crate::session::{check_auth, use_client, use_session};

use super::common::{ErrorBanner, LoadingView, ScreenHeader};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const NOTES_FAILED: &str = "Failed to load notes.";

/// Notes to show and the inline error, if the fetch failed.
fn notes_outcome(result: Result<Vec<Note>, ApiError>) -> (Vec<Note>, Option<String>) {
    match result {
        Ok(list) => (list, None),
        Err(e) => (Vec::new(), Some(e.user_message(NOTES_FAILED))),
    }
}

/// One day of a goal: the plan, completion and notes.
#[component]
pub fn DayDetailView(
    goal_id: String,
    date: String,
    on_back: EventHandler<()>,
    on_ask_tutor: EventHandler<String>,
) -> Element {
    let mut date_signal = use_signal(|| date.clone());
    if *date_signal.peek() != date {
        date_signal.set(date.clone());
    }

    let client = use_client();
    let gate = use_session();
    let mut notes = use_signal(Vec::<Note>::new);
    let mut completed = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut notes_error = use_signal(|| Option::<String>::None);

    let plan_client = client.clone();
    let plan = use_resource(move || {
        let client = plan_client.clone();
        let raw = date_signal();
        async move {
            let Some(day) = parse_date(&raw) else {
                warn!(date = %raw, "unparseable plan date");
                return Ok(None);
            };
            let plan = check_auth(client.plans().get_by_date(day).await, &client, gate).await?;
            if let Some(p) = &plan {
                completed.set(p.completed);
                let result = check_auth(client.plans().notes(&p.id).await, &client, gate).await;
                if let Err(e) = &result {
                    warn!(error = %e, plan = %p.id, "could not load notes");
                }
                let (list, err) = notes_outcome(result);
                notes.set(list);
                notes_error.set(err);
            }
            Ok::<Option<DayPlan>, ApiError>(plan)
        }
    });

    let complete_client = client.clone();
    let handle_complete = move |plan_id: String| {
        let client = complete_client.clone();
        action_error.set(None);
        spawn(async move {
            let result = client.plans().mark_complete(&plan_id).await;
            match check_auth(result, &client, gate).await {
                Ok(()) => completed.set(true),
                Err(e) => action_error.set(Some(e.user_message("Failed to mark complete."))),
            }
        });
    };

    let note_client = client.clone();
    let handle_add_note = move |(plan_id, content): (String, String)| {
        let client = note_client.clone();
        let goal_id = goal_id.clone();
        action_error.set(None);
        spawn(async move {
            let result = client.plans().add_note(&plan_id, &content).await;
            match check_auth(result, &client, gate).await {
                Ok(note) => {
                    info!(goal = %goal_id, plan = %plan_id, "note added");
                    notes.write().push(note);
                }
                Err(e) => action_error.set(Some(e.user_message("Failed to add note."))),
            }
        });
    };

    let body = match &*plan.read() {
        None => rsx! { LoadingView {} },
        Some(Err(e)) => rsx! {
            div {
                class: "screen-body",
                ErrorBanner { message: e.user_message("Failed to load plan.") }
            }
        },
        Some(Ok(None)) => rsx! {
            div {
                class: "screen-body centered",
                h2 { "No plan found" }
                p { class: "hint", "There is no plan scheduled for this day." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_back.call(()),
                    "Go Back"
                }
            }
        },
        Some(Ok(Some(day))) => rsx! {
            if let Some(err) = action_error() {
                div { class: "screen-body", ErrorBanner { message: err } }
            }
            PlanBody {
                plan: day.clone(),
                completed: completed(),
                notes: notes(),
                notes_error: notes_error(),
                on_complete: handle_complete,
                on_add_note: handle_add_note,
                on_ask_tutor: on_ask_tutor,
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen",
            ScreenHeader {
                title: "Day Plan",
                on_back: on_back,
                span {}
            }
            {body}
        }
    }
}

#[component]
fn PlanBody(
    plan: DayPlan,
    completed: bool,
    notes: Vec<Note>,
    notes_error: Option<String>,
    on_complete: EventHandler<String>,
    on_add_note: EventHandler<(String, String)>,
    on_ask_tutor: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(String::new);
    let date_label = plan.date.format("%A, %B %-d, %Y").to_string();
    let details_html = markdown::to_html(&plan.content.details);
    let plan_id = plan.id.clone();
    let note_plan_id = plan.id.clone();
    let topic = plan.topic.clone();

    rsx! {
        div {
            class: "screen-body",
            div {
                class: "card",
                p { class: "hint", "Day {plan.day_number} · {date_label}" }
                h2 { "{plan.topic}" }
                if completed {
                    span { class: "badge", "Completed" }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_complete.call(plan_id.clone()),
                        "Mark Complete"
                    }
                }
            }

            if plan.content.is_empty() {
                div { class: "card hint", "Today's content is still being prepared." }
            }
            if !plan.content.overview.is_empty() {
                div {
                    class: "card",
                    h3 { "Overview" }
                    p { "{plan.content.overview}" }
                }
            }
            if !plan.content.tasks.is_empty() {
                div {
                    class: "card",
                    h3 { "Tasks" }
                    ol {
                        for task in plan.content.tasks.iter() {
                            li { "{task}" }
                        }
                    }
                }
            }
            if !plan.content.details.is_empty() {
                div {
                    class: "card markdown",
                    h3 { "Details" }
                    div { dangerous_inner_html: "{details_html}" }
                }
            }
            if !plan.content.tips.is_empty() {
                div {
                    class: "card",
                    h3 { "Tips" }
                    p { "{plan.content.tips}" }
                }
            }

            button {
                class: "btn btn-secondary",
                onclick: move |_| on_ask_tutor.call(topic.clone()),
                "Ask the tutor"
            }

            div {
                class: "card",
                h3 { "Notes" }
                if let Some(err) = notes_error {
                    ErrorBanner { message: err }
                } else if notes.is_empty() {
                    p { class: "hint", "No notes yet." }
                }
                for note in notes.iter() {
                    div {
                        key: "{note.id}",
                        p { "{note.content}" }
                        p { class: "hint", "{note.created_at}" }
                    }
                }
                div {
                    class: "row",
                    input {
                        r#type: "text",
                        placeholder: "Add a note...",
                        value: draft(),
                        oninput: move |evt: FormEvent| draft.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            let content = draft().trim().to_string();
                            if content.is_empty() {
                                return;
                            }
                            draft.set(String::new());
                            on_add_note.call((note_plan_id.clone(), content));
                        },
                        "Add"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_notes_fetch_is_an_error_not_empty() {
        let err = ApiError::Server {
            status: 500,
            detail: None,
        };
        let (list, shown) = notes_outcome(Err(err));
        assert!(list.is_empty());
        assert_eq!(shown.as_deref(), Some(NOTES_FAILED));

        let err = ApiError::Server {
            status: 404,
            detail: Some("Plan not found".to_string()),
        };
        assert_eq!(notes_outcome(Err(err)).1.as_deref(), Some("Plan not found"));
    }

    #[test]
    fn test_loaded_notes_have_no_error() {
        let note = Note {
            id: "n-1".to_string(),
            day_plan_id: Some("p-1".to_string()),
            content: "Edge cases".to_string(),
            created_at: "2025-02-01T10:00:00".to_string(),
        };
        let (list, shown) = notes_outcome(Ok(vec![note.clone()]));
        assert_eq!(list, vec![note]);
        assert_eq!(shown, None);
    }
}
