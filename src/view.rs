use crate::models::fetch_state::FetchState;
use crate::models::selection::{FIRST_YEAR, month_name};
use crate::service::app_state::AppState;

const TITLE: &str = "📅 On This Day";

fn field<T: ToString>(value: Option<T>, placeholder: &str) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| format!("[{placeholder}]"))
}

/// Full text rendering of the form. Pure in `state`; `current_year` only
/// sizes the year picker hint.
pub fn render(state: &AppState, current_year: i32) -> String {
    let selection = &state.selection;

    let mut body: String = format!(
        "{}\nYear: {}  Month: {}{}  Day: {}{}\nYears {}-{}, {} day(s) available",
        TITLE,
        field(selection.year, "year"),
        field(selection.month, "month"),
        if state.can_select_month() { "" } else { " (locked)" },
        field(selection.day, "day"),
        if state.can_select_day() { "" } else { " (locked)" },
        current_year,
        FIRST_YEAR,
        state.day_options().len()
    );

    let button = if state.fetch.is_loading() {
        "Searching..."
    } else {
        "What happened?"
    };
    body.push_str(&format!(
        "\n[{}]{}",
        button,
        if state.can_search() { "" } else { " (disabled)" }
    ));

    match &state.fetch {
        FetchState::Idle => {}
        FetchState::Loading => body.push_str("\nThe AI is gathering information..."),
        FetchState::Failed(err) => body.push_str(&format!("\nError! {}", err)),
        FetchState::Succeeded {
            events,
            source_label,
        } => {
            match selection.complete() {
                Some((year, month, day)) => body.push_str(&format!(
                    "\n\nEvents on {} {}, {}",
                    month_name(month),
                    day,
                    year
                )),
                None => body.push_str("\n\nEvents"),
            }
            for event in events {
                body.push_str(&format!("\n\n{}  {}", event.display_emoji(), event.title));
                if let Some(year) = event.year.as_deref().filter(|y| !y.trim().is_empty()) {
                    body.push_str(&format!("\n    Year: {}", year));
                }
                body.push_str(&format!("\n    Summary: {}", event.summary));
            }
            if !source_label.is_empty() {
                body.push_str(&format!("\n\nSource: {}", source_label));
                body.push_str(
                    "\n(This information was generated by an AI model from general information on the web.)",
                );
            }
        }
    }

    body.push('\n');
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::event::HistoricalEvent;
    use crate::models::selection::DateSelection;

    #[test]
    fn empty_form_locks_dependent_pickers() {
        let state = AppState::new();
        let text = render(&state, 2026);
        assert!(text.contains("Month: [month] (locked)"));
        assert!(text.contains("Day: [day] (locked)"));
        assert!(text.contains("[What happened?] (disabled)"));
    }

    #[test]
    fn success_lists_events_with_fallback_emoji() {
        let state = AppState {
            selection: DateSelection::new(1969, 7, 20),
            fetch: FetchState::Succeeded {
                events: vec![HistoricalEvent {
                    title: "Moon landing".to_string(),
                    summary: "Apollo 11 lands.".to_string(),
                    emoji: None,
                    year: Some("1969".to_string()),
                }],
                source_label: "label".to_string(),
            },
        };
        let text = render(&state, 2026);
        assert!(text.contains("Events on July 20, 1969"));
        assert!(text.contains("📅  Moon landing"));
        assert!(text.contains("Summary: Apollo 11 lands."));
        assert!(text.contains("Source: label"));
    }

    #[test]
    fn failure_shows_message_and_loading_disables_search() {
        let mut state = AppState {
            selection: DateSelection::new(2024, 2, 29),
            fetch: FetchState::Failed(FetchError::EmptyResult),
        };
        assert!(render(&state, 2026).contains("Error! No events found"));

        state.fetch = FetchState::Loading;
        let text = render(&state, 2026);
        assert!(text.contains("[Searching...] (disabled)"));
        assert!(text.contains("gathering information"));
    }
}
