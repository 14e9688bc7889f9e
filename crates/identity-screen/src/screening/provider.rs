use std::fmt;
use std::future::Future;

use serde::Deserialize;

use super::domain::ScreeningRequest;
use crate::config::ProviderConfig;

/// Outbound seam to the sanctions screening provider.
pub trait ScreeningProvider: Send + Sync {
    fn screen(
        &self,
        request: &ScreeningRequest,
    ) -> impl Future<Output = Result<ProviderResponse, ProviderError>> + Send;
}

/// Subset of the provider response the proxy reads. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub results: Vec<ProviderCaseResult>,
}

/// Per-case result; the proxy only ever submits one case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCaseResult {
    pub match_count: u64,
    #[serde(default)]
    pub matches: Option<Vec<ProviderMatch>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMatch {
    #[serde(default)]
    pub match_summary: Option<MatchSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    #[serde(default)]
    pub match_fields: Option<Vec<MatchField>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchField {
    #[serde(default)]
    pub field_name: Option<String>,
}

/// Failures talking to or interpreting the screening provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("screening provider api key is not configured")]
    MissingApiKey,
    #[error("screening provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("screening provider returned no case results")]
    EmptyResults,
    #[error("screening provider reported {match_count} matches without match summaries")]
    IncompleteMatches { match_count: u64 },
}

/// HTTPS client for the OFAC screening API.
#[derive(Clone)]
pub struct OfacApiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OfacApiClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for OfacApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OfacApiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl ScreeningProvider for OfacApiClient {
    async fn screen(&self, request: &ScreeningRequest) -> Result<ProviderResponse, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey)?;

        let response = self
            .http
            .post(&self.endpoint)
            .header("apiKey", api_key)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ProviderResponse>().await?)
    }
}
