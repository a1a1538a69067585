use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::views::{CalendarView, ChatView, DashboardView, DayDetailView, NewGoalView, SettingsView};

use crate::Route;

fn chat_route(topic: String) -> Route {
    Route::Chat {
        topic,
        session: String::new(),
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView {
            on_new_goal: move |_| {
                nav.push(Route::NewGoal {});
            },
            on_open_goal: move |goal_id: String| {
                nav.push(Route::Calendar { goal_id });
            },
            on_chat: move |_| {
                nav.push(chat_route(String::new()));
            },
            on_settings: move |_| {
                nav.push(Route::Settings {});
            },
        }
    }
}

#[component]
pub fn NewGoal() -> Element {
    let nav = use_navigator();
    rsx! {
        NewGoalView {
            // The wizard is done; back from the calendar goes to the dashboard
            on_created: move |goal_id: String| {
                nav.replace(Route::Calendar { goal_id });
            },
            on_cancel: move |_| nav.go_back(),
        }
    }
}

#[component]
pub fn Calendar(goal_id: String) -> Element {
    let nav = use_navigator();
    let day_goal = goal_id.clone();
    rsx! {
        CalendarView {
            goal_id: goal_id,
            on_open_day: move |date: NaiveDate| {
                nav.push(Route::DayDetail {
                    goal_id: day_goal.clone(),
                    date: date.format("%Y-%m-%d").to_string(),
                });
            },
            on_back: move |_| nav.go_back(),
        }
    }
}

#[component]
pub fn DayDetail(goal_id: String, date: String) -> Element {
    let nav = use_navigator();
    rsx! {
        DayDetailView {
            goal_id: goal_id,
            date: date,
            on_back: move |_| nav.go_back(),
            on_ask_tutor: move |topic: String| {
                nav.push(chat_route(topic));
            },
        }
    }
}

#[component]
pub fn Chat(topic: String, session: String) -> Element {
    let nav = use_navigator();
    rsx! {
        ChatView {
            topic: topic,
            session: session,
            on_back: move |_| nav.go_back(),
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let nav = use_navigator();
    rsx! {
        SettingsView {
            on_back: move |_| nav.go_back(),
            on_signed_out: move |_| {
                nav.replace(Route::Landing {});
            },
        }
    }
}
