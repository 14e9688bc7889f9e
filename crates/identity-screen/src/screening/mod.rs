//! Sanctions screening proxy: presence validation, date normalization, the
//! outbound provider call, and reduction of provider matches into per-field flags.

pub mod domain;
pub mod normalize;
pub mod provider;
pub mod router;
pub mod service;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    CheckRequest, FieldBreakdown, ScreeningCase, ScreeningRequest, ScreeningResult,
    ScreeningStatus, SubmissionInput, MIN_SCORE, SCREENING_SOURCES,
};
pub use normalize::MISSING_FIELDS_MESSAGE;
pub use provider::{
    MatchField, MatchSummary, OfacApiClient, ProviderCaseResult, ProviderError, ProviderMatch,
    ProviderResponse, ScreeningProvider,
};
pub use router::screening_router;
pub use service::{ScreeningError, ScreeningService};
