use dioxus::prelude::*;
use store::ReminderConfig;
use tracing::{error, info};

use crate::client::data_dir;
use crate::session::{sign_out, use_client, use_config, use_session};

use super::common::ScreenHeader;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn hour_label(hour: u8) -> String {
    ReminderConfig {
        enabled: true,
        hour,
        minute: 0,
    }
    .time_label()
}

/// Account, reminder preference, server info and logout.
#[component]
pub fn SettingsView(on_back: EventHandler<()>, on_signed_out: EventHandler<()>) -> Element {
    let client = use_client();
    let gate = use_session();
    let mut config = use_config();
    let mut save_status = use_signal(|| Option::<Result<(), String>>::None);
    let mut confirm_logout = use_signal(|| false);

    let email = gate()
        .user()
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut update_reminder = move |enabled: bool, hour: u8| {
        let minute = config.read().reminder.minute;
        let updated = config.read().clone().with_reminder(enabled, hour, minute);
        match updated.save(&data_dir()) {
            Ok(()) => {
                info!(enabled, hour, "reminder preference saved");
                save_status.set(Some(Ok(())));
            }
            Err(e) => {
                error!(error = %e, "failed to save config");
                save_status.set(Some(Err(e.to_string())));
            }
        }
        config.set(updated);
    };

    let handle_logout = move |_: MouseEvent| {
        let client = client.clone();
        spawn(async move {
            sign_out(&client, gate).await;
            on_signed_out.call(());
        });
    };

    let current = config.read().clone();
    let reminder = current.reminder.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen",
            ScreenHeader {
                title: "Settings",
                on_back: on_back,
                span {}
            }
            div {
                class: "screen-body",

                div {
                    class: "card",
                    h3 { "Account" }
                    p { class: "hint", "Email" }
                    p { "{email}" }
                }

                div {
                    class: "card",
                    h3 { "Daily Reminder" }
                    label {
                        class: "row",
                        input {
                            r#type: "checkbox",
                            checked: reminder.enabled,
                            onchange: move |evt: FormEvent| update_reminder(evt.checked(), reminder.hour),
                        }
                        "Remind me to study every day"
                    }
                    if reminder.enabled {
                        div {
                            class: "row",
                            span { "Time" }
                            select {
                                value: "{reminder.hour}",
                                onchange: move |evt: FormEvent| {
                                    if let Ok(hour) = evt.value().parse::<u8>() {
                                        update_reminder(true, hour);
                                    }
                                },
                                for h in 0..24u8 {
                                    option {
                                        value: "{h}",
                                        selected: h == reminder.hour,
                                        "{hour_label(h)}"
                                    }
                                }
                            }
                        }
                        p { class: "hint", "Next reminder at {reminder.time_label()}" }
                    }
                    {
                        match save_status() {
                            Some(Ok(())) => rsx! { span { class: "hint met", "Saved" } },
                            Some(Err(e)) => rsx! { span { class: "error", "{e}" } },
                            None => rsx! {},
                        }
                    }
                }

                div {
                    class: "card",
                    h3 { "Server" }
                    p { class: "hint", "API URL" }
                    p { "{current.api.base_url}" }
                }

                if confirm_logout() {
                    div {
                        class: "card",
                        p { "Are you sure you want to log out?" }
                        div {
                            class: "row",
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| confirm_logout.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: handle_logout,
                                "Logout"
                            }
                        }
                    }
                } else {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| confirm_logout.set(true),
                        "Logout"
                    }
                }
            }
        }
    }
}
