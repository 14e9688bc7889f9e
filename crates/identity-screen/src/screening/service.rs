use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{CheckRequest, ScreeningRequest, ScreeningResult};
use super::normalize::{self, MISSING_FIELDS_MESSAGE};
use super::provider::{ProviderError, ScreeningProvider};
use super::summary;

/// Service composing validation, request shaping, the provider call, and reduction.
pub struct ScreeningService<P> {
    provider: Arc<P>,
}

impl<P> ScreeningService<P>
where
    P: ScreeningProvider + 'static,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Screen one identity. Nothing is sent to the provider unless every field is present.
    pub async fn check(&self, request: CheckRequest) -> Result<ScreeningResult, ScreeningError> {
        let submission = normalize::validate(request)?;
        let outbound = ScreeningRequest::for_submission(&submission);
        debug!(sources = outbound.sources.len(), "submitting screening case");

        let response = self.provider.screen(&outbound).await?;
        let match_count = response
            .results
            .first()
            .map(|case| case.match_count)
            .unwrap_or_default();
        let result = summary::reduce(response)?;

        info!(
            status = result.status.label(),
            match_count,
            name_match = result.screening_results.name,
            dob_match = result.screening_results.dob,
            country_match = result.screening_results.country,
            "screening completed"
        );
        Ok(result)
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
