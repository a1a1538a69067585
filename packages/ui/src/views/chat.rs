use api::ChatSessionSummary;
use dioxus::prelude::*;
use tracing::warn;

use crate::chat::{Outgoing, Transcript, STARTER_PROMPTS, TOPIC_PRESETS};
use crate::client::AppClient;
use crate::markdown;
use crate::session::{check_auth, use_client, use_session, SessionGate};

use super::common::ScreenHeader;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// AI tutor conversation. `topic` and `session` may be empty.
#[component]
pub fn ChatView(topic: String, session: String, on_back: EventHandler<()>) -> Element {
    let client = use_client();
    let gate = use_session();
    let mut transcript = use_signal(|| Transcript::with_topic(Some(topic.clone())));
    let mut input = use_signal(String::new);

    let history_client = client.clone();
    let _history = use_resource(move || {
        let client = history_client.clone();
        let session_id = session.clone();
        async move {
            if session_id.trim().is_empty() {
                return;
            }
            load_history(client, session_id, transcript, gate).await;
        }
    });

    let sessions_client = client.clone();
    let recent = use_resource(move || {
        let client = sessions_client.clone();
        async move {
            match check_auth(client.chat().sessions().await, &client, gate).await {
                Ok(list) => list,
                Err(e) => {
                    warn!(error = %e, "could not load recent chats");
                    Vec::new()
                }
            }
        }
    });

    let send_client = client.clone();
    let send = use_callback(move |text: String| {
        let mut draft = text;
        let Some(out) = transcript.write().submit(&mut draft) else {
            return;
        };
        input.set(draft);
        send_message(send_client.clone(), out, transcript, gate);
    });

    let open_client = client.clone();
    let open_session = use_callback(move |session_id: String| {
        let client = open_client.clone();
        spawn(async move {
            transcript.set(Transcript::default());
            load_history(client, session_id, transcript, gate).await;
        });
    });

    let state = transcript.read();
    let in_flight = state.is_in_flight();
    let active_topic = state.topic().map(str::to_string);
    let recent_list: Vec<ChatSessionSummary> = recent.read().clone().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen",
            ScreenHeader {
                title: "AI Tutor",
                on_back: on_back,
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        transcript.write().reset();
                        input.set(String::new());
                    },
                    "New chat"
                }
            }

            div {
                class: "row screen-body",
                for preset in TOPIC_PRESETS {
                    button {
                        class: if active_topic.as_deref() == Some(preset.topic) { "chip active" } else { "chip" },
                        onclick: move |_| transcript.write().toggle_topic(preset.topic),
                        "{preset.label}"
                    }
                }
            }

            div {
                class: "messages screen-body",
                if state.is_empty() {
                    h3 { "What would you like to learn?" }
                    for prompt in STARTER_PROMPTS {
                        button {
                            class: "chip",
                            onclick: move |_| send.call(prompt.to_string()),
                            "{prompt}"
                        }
                    }
                    if !recent_list.is_empty() {
                        h3 { "Recent conversations" }
                        for summary in recent_list {
                            RecentSession { key: "{summary.session_id}", summary: summary.clone(), on_open: open_session }
                        }
                    }
                }
                for entry in state.entries().iter() {
                    {
                        match entry.role {
                            api::Role::User => rsx! {
                                div { key: "{entry.seq}", class: "message user", "{entry.content}" }
                            },
                            api::Role::Assistant => {
                                let html = markdown::to_html(&entry.content);
                                rsx! {
                                    div {
                                        key: "{entry.seq}",
                                        class: "message assistant markdown",
                                        dangerous_inner_html: "{html}",
                                    }
                                }
                            }
                        }
                    }
                }
                if in_flight {
                    div { class: "message assistant hint", "Thinking..." }
                }
            }

            form {
                class: "composer",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    send.call(input());
                },
                textarea {
                    placeholder: "Ask anything...",
                    rows: "2",
                    value: input(),
                    oninput: move |evt: FormEvent| input.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: in_flight || input().trim().is_empty(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn RecentSession(summary: ChatSessionSummary, on_open: EventHandler<String>) -> Element {
    let id = summary.session_id.clone();
    rsx! {
        button {
            class: "card",
            onclick: move |_| on_open.call(id.clone()),
            strong { "{summary.title()}" }
            p { class: "hint", "{summary.message_count} messages" }
        }
    }
}

/// Append the user turn now and the reply when it arrives. Does nothing for blank
/// input or while another send is in flight.
fn send_message(
    client: AppClient,
    out: Outgoing,
    mut transcript: Signal<Transcript>,
    gate: Signal<SessionGate>,
) {
    spawn(async move {
        let result = client
            .chat()
            .send(&out.message, out.session_id.as_deref(), out.topic.as_deref())
            .await;
        let result = check_auth(result, &client, gate).await;
        if let Err(e) = &result {
            warn!(error = %e, "chat send failed");
        }
        transcript.write().finish_send(result);
    });
}

async fn load_history(
    client: AppClient,
    session_id: String,
    mut transcript: Signal<Transcript>,
    gate: Signal<SessionGate>,
) {
    match check_auth(client.chat().history(&session_id).await, &client, gate).await {
        Ok(history) => transcript.write().load_history(history),
        Err(e) => warn!(error = %e, session = %session_id, "could not load chat history"),
    }
}
