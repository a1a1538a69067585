mod layouts;
pub use layouts::{AuthLayout, Gate, MainLayout};

mod auth;
pub use auth::{Landing, Login, Register};

mod main_screens;
pub use main_screens::{Calendar, Chat, Dashboard, DayDetail, NewGoal, Settings};
