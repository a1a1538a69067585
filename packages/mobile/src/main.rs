use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;
use views::{
    AuthLayout, Calendar, Chat, Dashboard, DayDetail, Gate, Landing, Login, MainLayout, NewGoal,
    Register, Settings,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Gate {},
    #[layout(AuthLayout)]
        #[route("/welcome")]
        Landing {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[layout(MainLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/goals/new")]
        NewGoal {},
        #[route("/goals/:goal_id/calendar")]
        Calendar { goal_id: String },
        #[route("/goals/:goal_id/days/:date")]
        DayDetail { goal_id: String, date: String },
        #[route("/chat?:topic&:session")]
        Chat { topic: String, session: String },
        #[route("/settings")]
        Settings {},
}

fn main() {
    // .env is optional; it may set RUST_LOG or GOAL_ACHIEVER_API_URL
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ui::SessionProvider {
            Router::<Route> {}
        }
    }
}
