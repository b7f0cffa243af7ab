use async_trait::async_trait;
use tracing::{debug, error};

use crate::clients::gemini_client::{GenerateContentRequest, RawResponse, generate_content_url};
use crate::config::Settings;
use crate::error::FetchError;

/// One `generateContent` round trip. Non-success statuses come back as
/// `Ok`; only failures without a status are `Err`.
#[async_trait]
pub trait GeminiClient: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<RawResponse, FetchError>;
}

pub struct GeminiService {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: generate_content_url(&settings.base_url, &settings.model),
            api_key: settings.api_key.clone(),
        }
    }

    async fn post(&self, request: &GenerateContentRequest) -> Result<RawResponse, reqwest::Error> {
        let response = self
            .http
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?; // read the body once

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[async_trait]
impl GeminiClient for GeminiService {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<RawResponse, FetchError> {
        debug!(url = %self.url, ?request, "sending generateContent request");
        let raw = self.post(request).await.map_err(|err| {
            error!(error = %err, "generateContent request failed");
            FetchError::Network(err.to_string())
        })?;
        if raw.is_success() {
            debug!(status = raw.status, body = %raw.body, "raw generateContent response");
        } else {
            error!(status = raw.status, body = %raw.body, "generateContent returned an error status");
        }
        Ok(raw)
    }
}
