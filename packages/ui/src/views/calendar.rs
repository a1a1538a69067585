use chrono::{Local, NaiveDate};
use dioxus::prelude::*;

use crate::calendar::{month_start, next_month, prev_month, DayCell, MonthGrid, WEEKDAYS};
use crate::session::{check_auth, use_client, use_session};

use super::common::{ErrorBanner, LoadingView, ScreenHeader};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn CalendarView(
    goal_id: String,
    on_open_day: EventHandler<NaiveDate>,
    on_back: EventHandler<()>,
) -> Element {
    let mut id_signal = use_signal(|| goal_id.clone());
    if *id_signal.peek() != goal_id {
        id_signal.set(goal_id.clone());
    }

    let client = use_client();
    let gate = use_session();
    let today = Local::now().date_naive();
    let mut month = use_signal(|| month_start(today));

    let goal = use_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move {
            let found = check_auth(client.goals().get(&id).await, &client, gate).await?;
            if let Some(goal) = &found {
                // Open on the current month while the goal runs, otherwise on its first month
                let shown = if goal.day_number(today).is_some() {
                    today
                } else {
                    goal.start_date
                };
                month.set(month_start(shown));
            }
            Ok::<_, api::ApiError>(found)
        }
    });

    let body = match &*goal.read() {
        None => rsx! { LoadingView {} },
        Some(Err(e)) => rsx! {
            div {
                class: "screen-body",
                ErrorBanner { message: e.user_message("Failed to load goal.") }
            }
        },
        Some(Ok(None)) => rsx! {
            div {
                class: "screen-body centered",
                h2 { "Goal not found" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_back.call(()),
                    "Go Back"
                }
            }
        },
        Some(Ok(Some(goal))) => {
            let grid = MonthGrid::build(month(), goal, today);
            let elapsed = goal.days_elapsed(today);
            let progress = goal.progress_percent(today);
            rsx! {
                div {
                    class: "screen-body",
                    h2 { "{goal.title}" }
                    div {
                        class: "stats",
                        div {
                            class: "card",
                            div { class: "stat-value", "{elapsed}" }
                            div { class: "stat-label", "Days Elapsed" }
                        }
                        div {
                            class: "card",
                            div { class: "stat-value", "{goal.total_days}" }
                            div { class: "stat-label", "Total Days" }
                        }
                        div {
                            class: "card",
                            div { class: "stat-value", "{progress}%" }
                            div { class: "stat-label", "Progress" }
                        }
                    }
                    div {
                        class: "row",
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| month.set(prev_month(month())),
                            "<"
                        }
                        h3 { "{grid.title()}" }
                        button {
                            class: "btn btn-ghost",
                            onclick: move |_| month.set(next_month(month())),
                            ">"
                        }
                    }
                    div {
                        class: "calendar-grid",
                        for name in WEEKDAYS {
                            div { class: "calendar-weekday", "{name}" }
                        }
                        for (i, cell) in grid.cells.iter().enumerate() {
                            {
                                match cell {
                                    Some(cell) => rsx! {
                                        CalendarDay { key: "{i}", cell: *cell, on_open: on_open_day }
                                    },
                                    None => rsx! { div { key: "{i}" } },
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen",
            ScreenHeader {
                title: "Calendar",
                on_back: on_back,
                span {}
            }
            {body}
        }
    }
}

#[component]
fn CalendarDay(cell: DayCell, on_open: EventHandler<NaiveDate>) -> Element {
    let class = match (cell.is_today, cell.day_number.is_some()) {
        (true, true) => "calendar-day plan today",
        (true, false) => "calendar-day today",
        (false, true) => "calendar-day plan",
        (false, false) => "calendar-day",
    };
    let day = cell.date.format("%-d").to_string();
    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                if cell.day_number.is_some() {
                    on_open.call(cell.date);
                }
            },
            span { "{day}" }
            if let Some(n) = cell.day_number {
                span { class: "calendar-day-number", "Day {n}" }
            }
        }
    }
}
