use reqwest::Client;
use tokio::time::sleep;

use crate::client::{
    error::SearchError,
    retry::RetryPolicy,
    types::{RecipeResult, SearchPage, SearchQuery, SearchResponse},
};
use crate::config::UpstreamConfig;

/// HTTP client for the upstream recipe-search API.
///
/// Holds the upstream credentials and retry policy for the lifetime of the
/// process; one instance is shared across all inbound requests.
pub struct RecipeClient {
    base_url: String,
    app_id: String,
    app_key: String,
    http: Client,
    retry: RetryPolicy,
}

impl RecipeClient {
    pub fn new(upstream: &UpstreamConfig, retry: RetryPolicy) -> Self {
        let http = Client::builder()
            .timeout(upstream.timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            base_url: upstream.base_url.clone(),
            app_id: upstream.app_id.clone(),
            app_key: upstream.app_key.clone(),
            http,
            retry,
        }
    }

    /// Build the outbound query parameters for a search.
    ///
    /// Credentials and the dish name are always present; optional fields
    /// contribute a pair only when non-empty. Health labels repeat the
    /// `health` parameter once per label.
    pub fn query_payload(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut payload = vec![
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
            ("q", query.dish_name.clone()),
        ];

        for label in &query.health_labels {
            if !label.is_empty() {
                payload.push(("health", label.clone()));
            }
        }

        if let Some(diet) = query.diet_label.as_deref() {
            if !diet.is_empty() {
                payload.push(("diet", diet.to_string()));
            }
        }

        if let Some(calories) = query.max_calories {
            payload.push(("calories", calories.to_string()));
        }

        payload
    }

    /// Query the upstream API, retrying retryable statuses with backoff.
    ///
    /// Returns the extracted recipes and whether the upstream reported more
    /// data. An upstream body with `more` false or absent yields an empty
    /// page with `has_more == false`.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage, SearchError> {
        let payload = self.query_payload(query);
        let url = format!("{}?{}", self.base_url, render_query(&payload));
        let total_attempts = self.retry.max_retries + 1;
        let mut attempt = 1u32;

        let response = loop {
            tracing::info!(
                "Calling upstream {} (attempt {}/{})",
                self.base_url,
                attempt,
                total_attempts
            );

            let response = self
                .http
                .get(&url)
                .send()
                .await
                .map_err(SearchError::from_request_error)?;

            let status = response.status().as_u16();
            tracing::info!("Upstream response status {}", status);

            if !self.retry.is_retryable(status) {
                break response;
            }

            if attempt >= total_attempts {
                tracing::warn!(
                    "Retry budget exhausted after {} attempts, last status {}",
                    attempt,
                    status
                );
                return Err(SearchError::RetriesExhausted {
                    attempts: attempt,
                    status,
                });
            }

            let delay = self.retry.backoff_delay(attempt);
            tracing::warn!("Upstream returned {}, retrying in {:?}", status, delay);
            sleep(delay).await;
            attempt += 1;
        };

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(SearchError::MalformedResponse)?;

        if !body.more {
            tracing::info!("Upstream reports no further data");
            return Ok(SearchPage::default());
        }

        let results: Vec<RecipeResult> = body.hits.into_iter().map(RecipeResult::from).collect();
        tracing::info!("Extracted {} hits from upstream response", results.len());

        Ok(SearchPage {
            results,
            has_more: true,
        })
    }
}

fn render_query(payload: &[(&'static str, String)]) -> String {
    payload
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
