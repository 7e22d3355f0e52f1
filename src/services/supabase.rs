use crate::models::Specialist;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when talking to the Supabase record store
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Supabase PostgREST client for the specialists table
///
/// The record store owns specialist rows; this client only reads them. It is
/// also the single place where rows are validated: anything malformed or
/// violating the data-model invariants is dropped here, so the discovery
/// engine never re-checks records.
pub struct SupabaseClient {
    endpoint: String,
    api_key: String,
    table: String,
    client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(endpoint: String, api_key: String, table: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            table,
            client,
        }
    }

    /// Fetch the full specialist roster, ordered by name ascending
    ///
    /// The name ordering is part of the store contract: it is the ranking
    /// fallback when no user location is supplied, and the engine never
    /// re-sorts by name itself.
    pub async fn fetch_specialists(&self) -> Result<Vec<Specialist>, SupabaseError> {
        let url = format!(
            "{}/rest/v1/{}?select=*&order=name.asc",
            self.endpoint.trim_end_matches('/'),
            self.table
        );

        tracing::debug!("Fetching specialist roster from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SupabaseError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to fetch specialists: {} - {}", status, body);
            return Err(SupabaseError::ApiError(format!(
                "Failed to fetch specialists: {}",
                status
            )));
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| SupabaseError::InvalidResponse(format!("Expected a row array: {}", e)))?;

        let total = rows.len();
        let specialists: Vec<Specialist> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<Specialist>(row) {
                Ok(specialist) => match specialist.validate() {
                    Ok(()) => Some(specialist),
                    Err(e) => {
                        tracing::warn!(
                            "Skipping specialist {} with invalid fields: {}",
                            specialist.id,
                            e
                        );
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!("Skipping malformed specialist row: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!(
            "Fetched {} specialists ({} rows served)",
            specialists.len(),
            total
        );

        Ok(specialists)
    }

    /// Check that the record store answers queries
    pub async fn health_check(&self) -> Result<bool, SupabaseError> {
        let url = format!(
            "{}/rest/v1/{}?select=id&limit=1",
            self.endpoint.trim_end_matches('/'),
            self.table
        );

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}
