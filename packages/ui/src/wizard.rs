//! # New Goal wizard state
//!
//! | Step | Collects | Can proceed when |
//! |------|----------|------------------|
//! | 1 | title | title is not blank |
//! | 2 | duration + optional start date | days in `1..=365`, start date empty or `YYYY-MM-DD` |
//! | 3 | focus areas | at least one selected |
//! | 4 | AI option | always |
//!
//! [`GoalWizard::to_request`] re-checks every step before a request is built, so a
//! goal outside the allowed range never reaches the network.

use std::collections::BTreeSet;
use std::fmt;

use api::models::goal::{MAX_DAYS, MIN_DAYS};
use api::{Focus, NewGoal};
use chrono::NaiveDate;

pub const STEPS: u8 = 4;
pub const DEFAULT_DAYS: u32 = 90;
pub const DURATION_PRESETS: [u32; 3] = [30, 90, 180];

pub const CREATE_FAILED: &str = "Failed to create goal. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardError {
    MissingTitle,
    DaysOutOfRange,
    InvalidStartDate,
    NoFocus,
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            WizardError::MissingTitle => "Give your goal a title",
            WizardError::DaysOutOfRange => "Duration must be between 1 and 365 days",
            WizardError::InvalidStartDate => "Start date must look like YYYY-MM-DD",
            WizardError::NoFocus => "Pick at least one focus area",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalWizard {
    step: u8,
    pub title: String,
    /// Raw text of the duration field.
    pub days: String,
    /// Raw text of the start date field; empty means "today".
    pub start_date: String,
    focuses: BTreeSet<Focus>,
    pub use_ai: bool,
}

impl Default for GoalWizard {
    fn default() -> Self {
        Self {
            step: 1,
            title: String::new(),
            days: DEFAULT_DAYS.to_string(),
            start_date: String::new(),
            focuses: Focus::ALL.into_iter().collect(),
            use_ai: false,
        }
    }
}

impl GoalWizard {
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step == STEPS
    }

    pub fn set_days(&mut self, days: u32) {
        self.days = days.to_string();
    }

    pub fn is_selected(&self, focus: Focus) -> bool {
        self.focuses.contains(&focus)
    }

    pub fn toggle_focus(&mut self, focus: Focus) {
        if !self.focuses.remove(&focus) {
            self.focuses.insert(focus);
        }
    }

    pub fn focuses(&self) -> Vec<Focus> {
        self.focuses.iter().copied().collect()
    }

    fn check_title(&self) -> Result<(), WizardError> {
        if self.title.trim().is_empty() {
            return Err(WizardError::MissingTitle);
        }
        Ok(())
    }

    fn check_duration(&self) -> Result<(u32, Option<NaiveDate>), WizardError> {
        let days = self
            .days
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|d| (MIN_DAYS..=MAX_DAYS).contains(d))
            .ok_or(WizardError::DaysOutOfRange)?;
        let start = self.start_date.trim();
        let start_date = if start.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(start, "%Y-%m-%d")
                    .map_err(|_| WizardError::InvalidStartDate)?,
            )
        };
        Ok((days, start_date))
    }

    fn check_focus(&self) -> Result<(), WizardError> {
        if self.focuses.is_empty() {
            return Err(WizardError::NoFocus);
        }
        Ok(())
    }

    /// Validation of the current step only.
    pub fn check_step(&self) -> Result<(), WizardError> {
        match self.step {
            1 => self.check_title(),
            2 => self.check_duration().map(|_| ()),
            3 => self.check_focus(),
            _ => Ok(()),
        }
    }

    pub fn can_proceed(&self) -> bool {
        self.check_step().is_ok()
    }

    /// Advance one step. Returns false and stays put if the current step is invalid.
    pub fn next(&mut self) -> bool {
        if self.step >= STEPS || !self.can_proceed() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn back(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /// Build the creation request, validating every step again.
    pub fn to_request(&self) -> Result<NewGoal, WizardError> {
        self.check_title()?;
        let (total_days, start_date) = self.check_duration()?;
        self.check_focus()?;
        Ok(NewGoal {
            title: self.title.trim().to_string(),
            total_days,
            start_date,
            focuses: self.focuses(),
            use_ai: self.use_ai,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> GoalWizard {
        GoalWizard {
            title: "  Interview prep ".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let w = GoalWizard::default();
        assert_eq!(w.step(), 1);
        assert_eq!(w.days, "90");
        assert_eq!(w.focuses(), Focus::ALL.to_vec());
        assert!(!w.use_ai);
    }

    #[test]
    fn test_blank_title_blocks_step_one() {
        let mut w = GoalWizard::default();
        assert!(!w.next());
        assert_eq!(w.step(), 1);
        assert_eq!(w.check_step(), Err(WizardError::MissingTitle));

        w.title = "Prep".to_string();
        assert!(w.next());
        assert_eq!(w.step(), 2);
    }

    #[test]
    fn test_duration_bounds() {
        let mut w = filled();
        w.next();
        for bad in ["0", "366", "-5", "ninety", ""] {
            w.days = bad.to_string();
            assert!(!w.can_proceed(), "{bad} should be rejected");
        }
        for good in ["1", "365", " 45 "] {
            w.days = good.to_string();
            assert!(w.can_proceed(), "{good} should be accepted");
        }
    }

    #[test]
    fn test_start_date_optional_but_parsed() {
        let mut w = filled();
        w.start_date = "2025-13-01".to_string();
        assert_eq!(w.to_request(), Err(WizardError::InvalidStartDate));

        w.start_date = "2025-03-01".to_string();
        assert_eq!(
            w.to_request().unwrap().start_date,
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
    }

    #[test]
    fn test_focus_toggle_requires_one() {
        let mut w = filled();
        w.next();
        w.next();
        assert_eq!(w.step(), 3);
        for f in Focus::ALL {
            w.toggle_focus(f);
        }
        assert!(!w.next());
        assert_eq!(w.check_step(), Err(WizardError::NoFocus));

        w.toggle_focus(Focus::Genai);
        w.toggle_focus(Focus::Dsa);
        assert_eq!(w.focuses(), vec![Focus::Dsa, Focus::Genai]);
        assert!(w.next());
        assert!(w.is_last_step());
        assert!(!w.next());
    }

    #[test]
    fn test_back_stops_at_first_step() {
        let mut w = filled();
        w.next();
        w.back();
        w.back();
        assert_eq!(w.step(), 1);
    }

    #[test]
    fn test_request_revalidates_everything() {
        let mut w = filled();
        w.set_days(400);
        assert_eq!(w.to_request(), Err(WizardError::DaysOutOfRange));

        w.set_days(DURATION_PRESETS[0]);
        w.use_ai = true;
        let req = w.to_request().unwrap();
        assert_eq!(req.title, "Interview prep");
        assert_eq!(req.total_days, 30);
        assert_eq!(req.start_date, None);
        assert!(req.use_ai);
    }
}
