use crate::domain::ports::{ConfigProvider, SearchBackend};
use crate::domain::search::{SearchRequest, SearchResponse};
use crate::utils::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Posts search requests to the candidate search endpoint.
pub struct HttpSearchClient {
    client: Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpSearchClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        let endpoint = format!(
            "{}{}",
            config.base_url().trim_end_matches('/'),
            config.search_path()
        );
        Ok(Self {
            client,
            endpoint,
            auth_token: config.auth_token().map(str::to_string),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchBackend for HttpSearchClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        tracing::debug!(
            endpoint = %self.endpoint,
            page = request.page,
            limit = request.limit,
            "sending candidate search"
        );

        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(token) = &self.auth_token {
            builder = builder.bearer_auth(token);
        }
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Search API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiStatus {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        let parsed: SearchResponse = response.json().await?;
        tracing::info!(
            results = parsed.results.len(),
            total = parsed.total_count,
            "candidate search completed"
        );
        Ok(parsed)
    }
}

/// Prefers the backend's `message` field, then the raw body, then the
/// HTTP reason phrase.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.chars().take(200).collect();
    }
    reason.unwrap_or("request failed").to_string()
}
