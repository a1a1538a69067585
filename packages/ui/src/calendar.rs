//! Month grid for the Calendar screen.
//!
//! Weeks start on Sunday. The grid opens with blank cells up to the weekday of the
//! 1st, followed by one cell per day of the month. Days inside the goal's range carry
//! their 1-based day number.

use api::Goal;
use chrono::{Datelike, Months, NaiveDate};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Position in the goal, or `None` outside it.
    pub day_number: Option<u32>,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// First day of the shown month.
    pub month: NaiveDate,
    /// `None` is a leading blank.
    pub cells: Vec<Option<DayCell>>,
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn next_month(month: NaiveDate) -> NaiveDate {
    month_start(month)
        .checked_add_months(Months::new(1))
        .unwrap_or(month)
}

pub fn prev_month(month: NaiveDate) -> NaiveDate {
    month_start(month)
        .checked_sub_months(Months::new(1))
        .unwrap_or(month)
}

/// `"March 2025"`.
pub fn month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

impl MonthGrid {
    pub fn build(month: NaiveDate, goal: &Goal, today: NaiveDate) -> Self {
        let first = month_start(month);
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut cells: Vec<Option<DayCell>> = vec![None; leading];
        let mut date = first;
        while date.month() == first.month() {
            cells.push(Some(DayCell {
                date,
                day_number: goal.day_number(date),
                is_today: date == today,
            }));
            match date.succ_opt() {
                Some(d) => date = d,
                None => break,
            }
        }

        MonthGrid {
            month: first,
            cells,
        }
    }

    pub fn title(&self) -> String {
        month_title(self.month)
    }

    /// Cells chunked into rows of seven; the last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<DayCell>]> {
        self.cells.chunks(7)
    }
}
