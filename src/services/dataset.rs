use crate::models::Restaurant;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching the restaurant dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Dataset endpoint returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the published Melp restaurant dataset
///
/// Performs the single HTTP GET that supplies the restaurant list. There is
/// no retry logic; a failed fetch is reported to the caller as-is.
pub struct DatasetClient {
    endpoint: String,
    client: Client,
}

impl DatasetClient {
    /// Create a new dataset client
    pub fn new(endpoint: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { endpoint, client }
    }

    /// Fetch the full restaurant list
    ///
    /// The endpoint serves a JSON array of restaurant documents. Unknown
    /// fields are ignored and documents that fail to deserialize are
    /// skipped, so one malformed record does not poison the whole dataset.
    pub async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, DatasetError> {
        tracing::debug!("Fetching restaurant dataset from: {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(DatasetError::ApiError(format!(
                "Failed to fetch restaurants: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let documents = json
            .as_array()
            .ok_or_else(|| DatasetError::InvalidResponse("Expected a JSON array".into()))?;

        let total = documents.len();

        let restaurants: Vec<Restaurant> = documents
            .iter()
            .filter_map(|doc| serde_json::from_value(doc.clone()).ok())
            .collect();

        tracing::debug!(
            "Fetched {} restaurants ({} documents in dataset)",
            restaurants.len(),
            total
        );

        Ok(restaurants)
    }
}
