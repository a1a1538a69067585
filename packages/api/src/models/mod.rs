//! Wire models for the Goal Achiever backend.

pub mod chat;
pub mod goal;
pub mod plan;
pub mod user;

pub use chat::{ChatHistory, ChatMessage, ChatReply, ChatSessionSummary, Role};
pub use goal::{Focus, Goal, NewGoal};
pub use plan::{DayPlan, Note, PlanContent, PlanSchema};
pub use user::AuthResponse;

/// Deserialize a calendar date that the backend may send either as `YYYY-MM-DD`
/// or as a full ISO-8601 datetime.
pub(crate) fn de_date<'de, D>(deserializer: D) -> Result<chrono::NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date `{raw}`")))
}

/// Parse the leading `YYYY-MM-DD` of a date or datetime string.
pub fn parse_date(raw: &str) -> Option<chrono::NaiveDate> {
    let head = raw.trim().get(..10)?;
    chrono::NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14);
        assert_eq!(parse_date("2025-03-14"), expected);
        assert_eq!(parse_date("2025-03-14T08:30:00"), expected);
        assert_eq!(parse_date("2025-03-14T08:30:00.123456+00:00"), expected);
        assert_eq!(parse_date("14/03/2025"), None);
        assert_eq!(parse_date("2025"), None);
    }
}
