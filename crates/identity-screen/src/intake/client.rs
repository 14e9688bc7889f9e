use reqwest::StatusCode;
use tracing::debug;

use crate::config::ClientConfig;
use crate::screening::{ScreeningResult, SubmissionInput};

/// Failures the intake client surfaces as a generic failed submission.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("screening proxy request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("screening proxy responded with {0}")]
    Status(StatusCode),
}

/// HTTP client for the proxy's `/api/check` endpoint.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(config.api_endpoint.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn check_url(&self) -> String {
        format!("{}/api/check", self.base_url.trim_end_matches('/'))
    }

    /// Post one submission. Anything other than a 200 with a decodable body is an error.
    pub async fn submit(&self, input: &SubmissionInput) -> Result<ScreeningResult, ClientError> {
        let url = self.check_url();
        debug!(%url, "submitting identity for screening");

        let response = self.http.post(&url).json(input).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Status(status));
        }

        Ok(response.json::<ScreeningResult>().await?)
    }
}
