use onThisDay::error::{FetchError, SelectionError};
use onThisDay::models::event::HistoricalEvent;
use onThisDay::models::fetch_state::FetchState;
use onThisDay::models::selection::{DateSelection, days_in_month, list_days_in_month};
use onThisDay::service::app_state::AppState;

fn succeeded() -> FetchState {
    FetchState::Succeeded {
        events: vec![HistoricalEvent {
            title: "A".to_string(),
            summary: "B".to_string(),
            emoji: None,
            year: None,
        }],
        source_label: "label".to_string(),
    }
}

fn state_with(year: i32, month: u32, day: u32) -> AppState {
    AppState {
        selection: DateSelection::new(year, month, day),
        fetch: FetchState::Idle,
    }
}

#[test]
fn day_count_matches_gregorian_calendar_for_every_month() {
    for year in [1900, 1999, 2000, 2023, 2024, 2100] {
        for month in 1..=12 {
            let days = list_days_in_month(Some(year), Some(month));
            assert_eq!(days.len() as u32, days_in_month(year, month));
            assert_eq!(days.first(), Some(&1));
        }
    }
    assert_eq!(list_days_in_month(Some(1900), Some(2)).len(), 28);
    assert_eq!(list_days_in_month(Some(2000), Some(2)).len(), 29);
    assert_eq!(list_days_in_month(Some(2024), Some(2)).len(), 29);
    assert_eq!(list_days_in_month(Some(2023), Some(2)).len(), 28);
}

#[test]
fn leap_day_cleared_when_year_becomes_common() {
    let mut state = state_with(2024, 2, 29);
    state.on_year_changed(Some(2023));
    assert_eq!(state.selection.year, Some(2023));
    assert_eq!(state.selection.month, Some(2));
    assert_eq!(state.selection.day, None);
}

#[test]
fn day_kept_when_it_still_fits() {
    let mut state = state_with(2024, 2, 28);
    state.on_year_changed(Some(2023));
    assert_eq!(state.selection.day, Some(28));
}

#[test]
fn day_cleared_when_month_gets_shorter() {
    let mut state = state_with(2023, 1, 31);
    state.on_month_changed(Some(4));
    assert_eq!(state.selection.day, None);

    let mut state = state_with(2023, 1, 30);
    state.on_month_changed(Some(4));
    assert_eq!(state.selection.day, Some(30));
}

#[test]
fn no_selector_change_leaves_an_overflowing_day() {
    for year in [1900, 2000, 2023, 2024] {
        for month in 1..=12 {
            for day in 1..=31 {
                let mut state = state_with(2024, 1, day);
                state.on_year_changed(Some(year));
                state.on_month_changed(Some(month));
                if let Some(kept) = state.selection.day {
                    assert!(kept <= days_in_month(year, month));
                }
            }
        }
    }
}

#[test]
fn every_selector_change_clears_results_and_errors() {
    let mut state = state_with(2024, 3, 5);
    state.fetch = succeeded();
    state.on_year_changed(Some(2020));
    assert_eq!(state.fetch, FetchState::Idle);

    state.fetch = FetchState::Failed(FetchError::EmptyResult);
    state.on_month_changed(Some(4));
    assert_eq!(state.fetch, FetchState::Idle);

    state.fetch = succeeded();
    state.on_day_changed(Some(6));
    assert_eq!(state.fetch, FetchState::Idle);
}

#[test]
fn change_during_loading_keeps_request_in_flight() {
    let mut state = state_with(2024, 3, 5);
    state.fetch = FetchState::Loading;
    state.on_day_changed(Some(7));
    assert!(state.fetch.is_loading());
    assert!(!state.can_search());
}

#[test]
fn pickers_unlock_in_order() {
    let mut state = AppState::new();
    assert!(!state.can_select_month());
    assert!(!state.can_select_day());
    assert!(!state.can_search());
    assert!(state.day_options().is_empty());

    state.on_year_changed(Some(2024));
    assert!(state.can_select_month());
    assert!(!state.can_select_day());

    state.on_month_changed(Some(2));
    assert!(state.can_select_day());
    assert_eq!(state.day_options().len(), 29);
    assert!(!state.can_search());

    state.on_day_changed(Some(29));
    assert!(state.can_search());

    state.on_year_changed(None);
    assert!(!state.can_select_month());
    assert!(!state.can_search());
}

#[test]
fn year_options_follow_the_supplied_current_year() {
    let state = AppState::new();
    let years = state.year_options(2027);
    assert_eq!(years.first(), Some(&2027));
    assert_eq!(years.last(), Some(&1900));
    assert!(years.windows(2).all(|pair| pair[0] == pair[1] + 1));
    assert_eq!(state.month_options(), (1..=12).collect::<Vec<u32>>());
}

#[test]
fn with_date_accepts_a_valid_leap_day() {
    let state = AppState::with_date(2026, 2024, 2, 29).unwrap();
    assert_eq!(state.selection, DateSelection::new(2024, 2, 29));
    assert_eq!(state.fetch, FetchState::Idle);
    assert!(state.can_search());
}

#[test]
fn with_date_rejects_years_outside_the_picker() {
    assert_eq!(
        AppState::with_date(2026, 1899, 1, 1),
        Err(SelectionError::YearOutOfRange { year: 1899, first: 1900, latest: 2026 })
    );
    assert_eq!(
        AppState::with_date(2026, 2027, 1, 1),
        Err(SelectionError::YearOutOfRange { year: 2027, first: 1900, latest: 2026 })
    );
    assert!(AppState::with_date(2026, 1900, 1, 1).is_ok());
    assert!(AppState::with_date(2026, 2026, 1, 1).is_ok());
}

#[test]
fn with_date_rejects_months_outside_one_to_twelve() {
    assert_eq!(
        AppState::with_date(2026, 2024, 0, 1),
        Err(SelectionError::MonthOutOfRange(0))
    );
    assert_eq!(
        AppState::with_date(2026, 2024, 13, 1),
        Err(SelectionError::MonthOutOfRange(13))
    );
}

#[test]
fn with_date_rejects_days_past_month_end() {
    let err = AppState::with_date(2026, 2023, 2, 29).unwrap_err();
    assert_eq!(
        err,
        SelectionError::DayOutOfRange { year: 2023, month: 2, day: 29, last: 28 }
    );
    assert!(err.to_string().contains("between 1 and 28"));
    assert!(AppState::with_date(2026, 2023, 4, 31).is_err());
    assert!(AppState::with_date(2026, 2023, 4, 0).is_err());
}
