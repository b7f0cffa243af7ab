use chrono::{Datelike, Local, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Oldest year offered by the year picker.
pub const FIRST_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl DateSelection {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        }
    }

    /// The full triple, only when every field is set.
    pub fn complete(&self) -> Option<(i32, u32, u32)> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => Some((year, month, day)),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete().is_some()
    }

    // Clears the day when it no longer fits the selected year/month.
    pub(crate) fn drop_overflowing_day(&mut self) {
        if let (Some(year), Some(month), Some(day)) = (self.year, self.month, self.day) {
            if day > days_in_month(year, month) {
                self.day = None;
            }
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`, or 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// The calendar year right now, in `timezone` or the local zone.
pub fn current_year(timezone: Option<Tz>) -> i32 {
    match timezone {
        Some(tz) => Utc::now().with_timezone(&tz).year(),
        None => Local::now().year(),
    }
}

/// Years offered by the picker, newest first, down to [`FIRST_YEAR`].
pub fn list_years(current_year: i32) -> Vec<i32> {
    (FIRST_YEAR..=current_year).rev().collect()
}

pub fn list_months() -> Vec<u32> {
    (1..=12).collect()
}

pub fn list_days_in_month(year: Option<i32>, month: Option<u32>) -> Vec<u32> {
    match (year, month) {
        (Some(year), Some(month)) => (1..=days_in_month(year, month)).collect(),
        _ => Vec::new(),
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
