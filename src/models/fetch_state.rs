use crate::error::FetchError;
use crate::models::event::HistoricalEvent;

/// Provenance disclosure shown beside generated results.
pub const SOURCE_LABEL: &str =
    "Based on general web information, generated by an AI model.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Succeeded {
        events: Vec<HistoricalEvent>,
        source_label: String,
    },
    Failed(FetchError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn events(&self) -> &[HistoricalEvent] {
        match self {
            FetchState::Succeeded { events, .. } => events,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
