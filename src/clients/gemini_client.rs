use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::event::DEFAULT_EMOJI;
use crate::models::selection::month_name;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Schema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Array,
    Object,
    String,
}

/// Subset of the OpenAPI schema object accepted as `responseSchema`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    fn string() -> Self {
        Self {
            kind: SchemaType::String,
            items: None,
            properties: None,
            required: None,
        }
    }
}

/// Array of `{title, summary, year?, emoji?}` objects.
pub fn events_schema() -> Schema {
    let properties: BTreeMap<String, Schema> = ["title", "summary", "year", "emoji"]
        .into_iter()
        .map(|name| (name.to_string(), Schema::string()))
        .collect();

    Schema {
        kind: SchemaType::Array,
        items: Some(Box::new(Schema {
            kind: SchemaType::Object,
            items: None,
            properties: Some(properties),
            required: Some(vec!["title".to_string(), "summary".to_string()]),
        })),
        properties: None,
        required: None,
    }
}

pub fn build_events_prompt(year: i32, month: u32, day: u32) -> String {
    format!(
        "Tell me three historical events that happened on {month_name} {day}.\n\
         The selected date is {year:04}-{month:02}-{day:02}; use the year as context.\n\
         For each event give:\n\
         - \"title\": a short title\n\
         - \"summary\": a concise, concrete summary of its background and impact\n\
         - \"emoji\": exactly one emoji that represents the event\n\
         - \"year\": the year it happened, if known\n\
         If no emoji fits, use '{default_emoji}'.\n\
         Answer strictly in the requested JSON format.",
        month_name = month_name(month),
        day = day,
        year = year,
        month = month,
        default_emoji = DEFAULT_EMOJI,
    )
}

pub fn build_events_request(year: i32, month: u32, day: u32) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: build_events_prompt(year, month, day),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: events_schema(),
        },
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, the only field read.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
    }
}

/// Status line and body of one `generateContent` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub fn generate_content_url(base_url: &str, model: &str) -> String {
    format!("{}/v1beta/models/{}:generateContent", base_url.trim_end_matches('/'), model)
}
