mod common;
pub use common::{ErrorBanner, LoadingView, ScreenHeader};

mod landing;
pub use landing::LandingView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod dashboard;
pub use dashboard::DashboardView;

mod calendar;
pub use calendar::CalendarView;

mod day_detail;
pub use day_detail::DayDetailView;

mod chat;
pub use chat::ChatView;

mod new_goal;
pub use new_goal::NewGoalView;

mod settings;
pub use settings::SettingsView;
