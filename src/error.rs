//! Error types for date lookups and configuration.

/// Why a lookup ended without events. Every variant is terminal for the
/// attempt; the `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Year, month or day is still unset.
    #[error("Please select all three fields: year, month and day.")]
    Validation,

    /// The endpoint answered with a non-success status.
    #[error("Event search failed: {status} {reason}")]
    Transport { status: u16, reason: String },

    /// The request never got an HTTP status (connect, DNS, body read).
    #[error("An error occurred while searching for events: {0}")]
    Network(String),

    /// The envelope lacks `candidates[0].content.parts[0].text`.
    #[error("The AI response was not in the expected format (unexpected response shape).")]
    Shape,

    /// Blank payload, or nothing left after dropping incomplete events.
    #[error("No events found for that date.")]
    EmptyResult,

    /// The text payload is not the structured array that was requested.
    #[error("Could not parse AI response. The JSON may be malformed: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config line {line}: {content}")]
    InvalidLine { line: usize, content: String },

    #[error("unknown timezone {0}")]
    UnknownTimezone(String),
}

/// A date given outside the options the pickers would offer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("year must be between {first} and {latest}, got {year}")]
    YearOutOfRange { year: i32, first: i32, latest: i32 },

    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    #[error("day must be between 1 and {last} for {year}-{month:02}, got {day}")]
    DayOutOfRange { year: i32, month: u32, day: u32, last: u32 },
}
