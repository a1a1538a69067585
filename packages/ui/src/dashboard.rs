//! Dashboard summary derived from the goal list.

use api::Goal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalStats {
    pub active_goals: usize,
    pub total_days: u32,
    pub longest_goal: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// No goals: show the "No Goals Yet" call to action, no stats.
    Empty,
    Populated(GoalStats),
}

impl Summary {
    pub fn of(goals: &[Goal]) -> Self {
        if goals.is_empty() {
            return Summary::Empty;
        }
        Summary::Populated(GoalStats {
            active_goals: goals.len(),
            total_days: goals.iter().map(|g| g.total_days).sum(),
            longest_goal: goals.iter().map(|g| g.total_days).max().unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn goal(id: &str, days: u32) -> Goal {
        Goal {
            id: id.to_string(),
            title: id.to_string(),
            total_days: days,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            created_at: None,
        }
    }

    #[test]
    fn test_zero_goals_is_empty_state() {
        assert_eq!(Summary::of(&[]), Summary::Empty);
    }

    #[test]
    fn test_stats() {
        let summary = Summary::of(&[goal("a", 30), goal("b", 90), goal("c", 45)]);
        assert_eq!(
            summary,
            Summary::Populated(GoalStats {
                active_goals: 3,
                total_days: 165,
                longest_goal: 90,
            })
        );
    }
}
