//! # Goals
//!
//! A [`Goal`] is a learning objective spanning `total_days` consecutive calendar days
//! starting at `start_date`; day 1 is the start date itself. The backend owns goals;
//! the client only holds per-screen copies.
//!
//! [`NewGoal`] is the creation request assembled by the New Goal wizard. The focus
//! areas are a closed set ([`Focus`]) serialized with the backend's snake_case ids.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Smallest and largest plan length the backend accepts.
pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub total_days: u32,
    #[serde(deserialize_with = "super::de_date")]
    pub start_date: NaiveDate,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Goal {
    /// Last calendar day of the goal (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(u64::from(self.total_days.saturating_sub(1))))
            .unwrap_or(NaiveDate::MAX)
    }

    /// 1-based day number of `date` within the goal, if it falls inside it.
    pub fn day_number(&self, date: NaiveDate) -> Option<u32> {
        if date < self.start_date || date > self.end_date() {
            return None;
        }
        let offset = (date - self.start_date).num_days();
        u32::try_from(offset).ok().map(|d| d + 1)
    }

    /// Number of goal days that have started on or before `today`, capped at `total_days`.
    pub fn days_elapsed(&self, today: NaiveDate) -> u32 {
        if today < self.start_date {
            return 0;
        }
        let started = (today - self.start_date).num_days() + 1;
        u32::try_from(started).map_or(self.total_days, |d| d.min(self.total_days))
    }

    /// Elapsed share of the goal as a whole percentage.
    pub fn progress_percent(&self, today: NaiveDate) -> u32 {
        if self.total_days == 0 {
            return 0;
        }
        let percent = u64::from(self.days_elapsed(today)) * 100 / u64::from(self.total_days);
        u32::try_from(percent).unwrap_or(100)
    }
}

/// Focus areas a plan can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Dsa,
    SystemDesign,
    Genai,
}

impl Focus {
    pub const ALL: [Focus; 3] = [Focus::Dsa, Focus::SystemDesign, Focus::Genai];

    pub fn label(self) -> &'static str {
        match self {
            Focus::Dsa => "Data Structures & Algorithms",
            Focus::SystemDesign => "System Design",
            Focus::Genai => "Generative AI",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Focus::Dsa => "Coding problems and patterns",
            Focus::SystemDesign => "Architecture and scalability",
            Focus::Genai => "LLMs and AI concepts",
        }
    }
}

/// Request body for `POST /goals`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGoal {
    pub title: String,
    pub total_days: u32,
    /// Defaults to today on the server when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub focuses: Vec<Focus>,
    pub use_ai: bool,
}
