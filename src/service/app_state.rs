use crate::error::SelectionError;
use crate::models::fetch_state::FetchState;
use crate::models::selection::{
    DateSelection, FIRST_YEAR, list_days_in_month, list_months, list_years,
};

/// Everything the view shows: the picked date and the lookup status.
/// Only selector events and the fetch controller write to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub selection: DateSelection,
    pub fetch: FetchState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks a whole date through the selectors, accepting only values the
    /// pickers would offer given `current_year`.
    pub fn with_date(
        current_year: i32,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Self, SelectionError> {
        let mut state = Self::new();
        if !state.year_options(current_year).contains(&year) {
            return Err(SelectionError::YearOutOfRange {
                year,
                first: FIRST_YEAR,
                latest: current_year,
            });
        }
        state.on_year_changed(Some(year));

        if !state.month_options().contains(&month) {
            return Err(SelectionError::MonthOutOfRange(month));
        }
        state.on_month_changed(Some(month));

        let days = state.day_options();
        if !days.contains(&day) {
            return Err(SelectionError::DayOutOfRange {
                year,
                month,
                day,
                last: days.len() as u32,
            });
        }
        state.on_day_changed(Some(day));
        Ok(state)
    }

    pub fn on_year_changed(&mut self, year: Option<i32>) {
        self.selection.year = year;
        self.selection.drop_overflowing_day();
        self.clear_results();
    }

    pub fn on_month_changed(&mut self, month: Option<u32>) {
        self.selection.month = month;
        self.selection.drop_overflowing_day();
        self.clear_results();
    }

    pub fn on_day_changed(&mut self, day: Option<u32>) {
        self.selection.day = day;
        self.clear_results();
    }

    // An in-flight request is never cancelled; its outcome still lands.
    fn clear_results(&mut self) {
        if !self.fetch.is_loading() {
            self.fetch = FetchState::Idle;
        }
    }

    pub fn can_select_month(&self) -> bool {
        self.selection.year.is_some()
    }

    pub fn can_select_day(&self) -> bool {
        self.selection.year.is_some() && self.selection.month.is_some()
    }

    pub fn can_search(&self) -> bool {
        self.selection.is_complete() && !self.fetch.is_loading()
    }

    pub fn year_options(&self, current_year: i32) -> Vec<i32> {
        list_years(current_year)
    }

    pub fn month_options(&self) -> Vec<u32> {
        list_months()
    }

    pub fn day_options(&self) -> Vec<u32> {
        list_days_in_month(self.selection.year, self.selection.month)
    }
}
