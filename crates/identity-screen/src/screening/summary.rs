use super::domain::{FieldBreakdown, ScreeningResult};
use super::provider::{ProviderError, ProviderResponse};

/// Collapse the provider response into the three-flag result.
///
/// Only the first case result is read. A zero match count is `Clear` whatever
/// else the response carries; otherwise every field of every match is OR-ed
/// into the breakdown.
pub fn reduce(response: ProviderResponse) -> Result<ScreeningResult, ProviderError> {
    let case = response
        .results
        .into_iter()
        .next()
        .ok_or(ProviderError::EmptyResults)?;

    if case.match_count == 0 {
        return Ok(ScreeningResult::clear());
    }

    let match_count = case.match_count;
    let matches = case
        .matches
        .ok_or(ProviderError::IncompleteMatches { match_count })?;

    let mut breakdown = FieldBreakdown::default();
    for entry in &matches {
        let fields = entry
            .match_summary
            .as_ref()
            .and_then(|summary| summary.match_fields.as_ref())
            .ok_or(ProviderError::IncompleteMatches { match_count })?;

        for field in fields {
            if let Some(name) = field.field_name.as_deref() {
                breakdown.record(name);
            }
        }
    }

    Ok(ScreeningResult::hit(breakdown))
}
