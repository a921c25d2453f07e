use crate::core::{prompt, response};
use crate::domain::model::KeywordSet;
use crate::domain::ports::{ConfigProvider, KeywordSource};
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

/// Client for the Gemini `generateContent` REST endpoint.
///
/// One outbound request per [`generate_keywords`] call: the instructional
/// prompt plus a schema constraining the output to the five keyword
/// categories. No retries, no timeout beyond the HTTP client default, no
/// cancellation. Concurrent calls are independent; the only shared state is
/// the connection pool and the read-only config.
///
/// [`generate_keywords`]: KeywordSource::generate_keywords
pub struct GeminiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> GeminiClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn request_payload(description: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt::build_prompt(description) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt::response_schema(),
            }
        })
    }

    /// Pulls the text payload out of `candidates[0].content.parts`. An empty
    /// string counts as no payload.
    fn extract_text(body: &Value) -> Option<&str> {
        body["candidates"][0]["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
            .filter(|text| !text.is_empty())
    }
}

#[async_trait]
impl<C: ConfigProvider> KeywordSource for GeminiClient<C> {
    async fn generate_keywords(&self, description: &str) -> Result<KeywordSet> {
        // Credential check happens before any network I/O.
        let api_key = self
            .config
            .api_key()
            .ok_or_else(|| FinderError::config("API key is not configured"))?;

        // The key travels as a header, never in the URL: reqwest errors
        // carry the full URL in their Display output.
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base().trim_end_matches('/'),
            self.config.model(),
        );

        tracing::debug!("Requesting keywords from model: {}", self.config.model());
        let http_response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&Self::request_payload(description))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Generation request failed: {}", e);
                FinderError::Transport(e)
            })?;

        tracing::debug!("Backend response status: {}", http_response.status());
        let http_response = http_response.error_for_status().map_err(|e| {
            tracing::error!("Backend returned error status: {}", e);
            FinderError::Transport(e)
        })?;

        let body: Value = http_response.json().await?;
        let text = Self::extract_text(&body).ok_or(FinderError::EmptyResponse)?;

        response::parse_keyword_set(text)
    }
}
