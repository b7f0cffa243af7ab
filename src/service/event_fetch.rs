use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::clients::gemini_client::{
    GenerateContentRequest, GenerateContentResponse, RawResponse, build_events_request,
};
use crate::error::FetchError;
use crate::models::event::{HistoricalEvent, RawEvent};
use crate::models::fetch_state::{FetchState, SOURCE_LABEL};
use crate::service::app_state::AppState;
use crate::service::gemini_service::GeminiClient;

/// A lookup that passed the entry guard and is waiting on the network.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub request: GenerateContentRequest,
}

#[derive(Debug, PartialEq)]
pub enum FetchStart {
    Started(PendingFetch),
    /// Selection incomplete; state is now `Failed(Validation)`.
    Invalid,
    /// A request is already in flight; nothing changed.
    Busy,
}

/// Entry guard plus the transition into `Loading`.
pub fn begin_fetch(state: &mut AppState) -> FetchStart {
    if state.fetch.is_loading() {
        return FetchStart::Busy;
    }
    let Some((year, month, day)) = state.selection.complete() else {
        state.fetch = FetchState::Failed(FetchError::Validation);
        return FetchStart::Invalid;
    };

    state.fetch = FetchState::Loading;
    FetchStart::Started(PendingFetch {
        year,
        month,
        day,
        request: build_events_request(year, month, day),
    })
}

/// Applies the transport outcome, whatever the selection is by now.
pub fn complete_fetch(state: &mut AppState, outcome: Result<RawResponse, FetchError>) {
    state.fetch = match outcome.and_then(|raw| decode_events(&raw)) {
        Ok(events) => FetchState::Succeeded {
            events,
            source_label: SOURCE_LABEL.to_string(),
        },
        Err(err) => FetchState::Failed(err),
    };
}

/// Classifies a raw response; checks run in a fixed order.
pub fn decode_events(raw: &RawResponse) -> Result<Vec<HistoricalEvent>, FetchError> {
    if !raw.is_success() {
        return Err(FetchError::Transport {
            status: raw.status,
            reason: raw.reason.clone(),
        });
    }

    let envelope: GenerateContentResponse =
        serde_json::from_str(&raw.body).map_err(|err| {
            debug!(error = %err, "response body is not a generateContent envelope");
            FetchError::Shape
        })?;
    let text = envelope.first_text().ok_or(FetchError::Shape)?;
    debug!(text, "structured payload from model");

    if text.trim().is_empty() {
        warn!("model returned an empty events payload");
        return Err(FetchError::EmptyResult);
    }

    // Only the outer array is strict; odd entries are filtered like blank ones.
    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(text).map_err(|err| FetchError::Parse(err.to_string()))?;
    let events: Vec<HistoricalEvent> = parsed
        .into_iter()
        .filter_map(RawEvent::from_value)
        .filter_map(RawEvent::into_displayable)
        .collect();

    if events.is_empty() {
        return Err(FetchError::EmptyResult);
    }
    Ok(events)
}

pub struct EventFetchController {
    client: Arc<dyn GeminiClient>,
}

impl EventFetchController {
    pub fn new(client: Arc<dyn GeminiClient>) -> Self {
        Self { client }
    }

    /// Runs one lookup for the current selection. `render` sees the
    /// `Loading` state before the request and the final state after it.
    pub async fn fetch<R>(&self, state: &mut AppState, mut render: R)
    where
        R: FnMut(&AppState),
    {
        let pending = match begin_fetch(state) {
            FetchStart::Started(pending) => pending,
            FetchStart::Invalid => {
                render(&*state);
                return;
            }
            FetchStart::Busy => {
                warn!("lookup already in flight, ignoring trigger");
                return;
            }
        };
        render(&*state);

        info!(
            year = pending.year,
            month = pending.month,
            day = pending.day,
            "looking up historical events"
        );
        let outcome = self.client.generate_content(&pending.request).await;
        complete_fetch(state, outcome);

        match &state.fetch {
            FetchState::Succeeded { events, .. } => info!(count = events.len(), "lookup succeeded"),
            FetchState::Failed(err) => warn!(error = %err, "lookup failed"),
            _ => {}
        }
        render(&*state);
    }
}
