use std::fmt;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use inquire::{InquireError, Select};
use onThisDay::config::Settings;
use onThisDay::models::selection::{current_year, month_name};
use onThisDay::service::app_state::AppState;
use onThisDay::service::event_fetch::EventFetchController;
use onThisDay::service::gemini_service::GeminiService;
use onThisDay::view::render;
use tracing::debug;

#[derive(Parser)]
#[command(about = "Look up historical events that happened on a chosen date")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick the date interactively (default).
    Form,
    /// Look up a single date and exit.
    Lookup {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Year,
    Month,
    Day,
    Search,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuAction::Year => "Choose year",
            MenuAction::Month => "Choose month",
            MenuAction::Day => "Choose day",
            MenuAction::Search => "What happened?",
            MenuAction::Quit => "Quit",
        };
        f.write_str(label)
    }
}

// One selector option; `Unset` is the empty placeholder entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick<T> {
    Unset,
    Value(T),
}

impl<T: fmt::Display> fmt::Display for Pick<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pick::Unset => f.write_str("(none)"),
            Pick::Value(v) => write!(f, "{v}"),
        }
    }
}

struct MonthLabel(u32);

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2} {}", self.0, month_name(self.0))
    }
}

pub async fn cli(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let controller = EventFetchController::new(Arc::new(GeminiService::new(&settings)));
    match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => run_form(&controller, &settings).await,
        Commands::Lookup { year, month, day } => {
            lookup_once(&controller, &settings, year, month, day).await
        }
    }
}

async fn lookup_once(
    controller: &EventFetchController,
    settings: &Settings,
    year: i32,
    month: u32,
    day: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let now_year = current_year(settings.timezone);
    let mut state = AppState::with_date(now_year, year, month, day)?;

    // Only the final state is printed in one-shot mode.
    controller.fetch(&mut state, |_| {}).await;
    println!("{}", render(&state, now_year));
    Ok(())
}

async fn run_form(
    controller: &EventFetchController,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = AppState::new();
    let show = |state: &AppState| println!("{}", render(state, current_year(settings.timezone)));
    show(&state);

    loop {
        let mut actions = vec![MenuAction::Year];
        if state.can_select_month() {
            actions.push(MenuAction::Month);
        }
        if state.can_select_day() {
            actions.push(MenuAction::Day);
        }
        if state.can_search() {
            actions.push(MenuAction::Search);
        }
        actions.push(MenuAction::Quit);

        let action = match Select::new("What next?", actions).prompt() {
            Ok(action) => action,
            Err(err) if is_cancel(&err) => break,
            Err(err) => return Err(err.into()),
        };
        debug!(?action, "menu action chosen");

        match action {
            MenuAction::Year => {
                let years = state.year_options(current_year(settings.timezone));
                match pick("Year", years, state.selection.year) {
                    Ok(Some(year)) => state.on_year_changed(year),
                    Ok(None) => continue,
                    Err(err) if is_cancel(&err) => break,
                    Err(err) => return Err(err.into()),
                }
            }
            MenuAction::Month => {
                let months: Vec<MonthLabel> =
                    state.month_options().into_iter().map(MonthLabel).collect();
                let current = state.selection.month.map(MonthLabel);
                match pick_by("Month", months, current, |a, b| a.0 == b.0) {
                    Ok(Some(month)) => state.on_month_changed(month.map(|m| m.0)),
                    Ok(None) => continue,
                    Err(err) if is_cancel(&err) => break,
                    Err(err) => return Err(err.into()),
                }
            }
            MenuAction::Day => {
                let days = state.day_options();
                match pick("Day", days, state.selection.day) {
                    Ok(Some(day)) => state.on_day_changed(day),
                    Ok(None) => continue,
                    Err(err) if is_cancel(&err) => break,
                    Err(err) => return Err(err.into()),
                }
            }
            MenuAction::Search => {
                controller.fetch(&mut state, show).await;
                continue;
            }
            MenuAction::Quit => break,
        }
        show(&state);
    }
    Ok(())
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn pick<T>(label: &str, values: Vec<T>, current: Option<T>) -> Result<Option<Option<T>>, InquireError>
where
    T: fmt::Display + PartialEq,
{
    pick_by(label, values, current, |a, b| a == b)
}

/// `Ok(None)` when the prompt was backed out of; `Ok(Some(None))` when the
/// placeholder was chosen.
fn pick_by<T, F>(
    label: &str,
    values: Vec<T>,
    current: Option<T>,
    same: F,
) -> Result<Option<Option<T>>, InquireError>
where
    T: fmt::Display,
    F: Fn(&T, &T) -> bool,
{
    let cursor = current
        .as_ref()
        .and_then(|c| values.iter().position(|v| same(v, c)))
        .map(|idx| idx + 1)
        .unwrap_or(0);
    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(Pick::Unset);
    options.extend(values.into_iter().map(Pick::Value));

    match Select::new(label, options).with_starting_cursor(cursor).prompt() {
        Ok(Pick::Unset) => Ok(Some(None)),
        Ok(Pick::Value(v)) => Ok(Some(Some(v))),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(err) => Err(err),
    }
}
