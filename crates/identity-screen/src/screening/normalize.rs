use super::domain::{CheckRequest, SubmissionInput};
use super::service::ScreeningError;

/// Returned to callers when any identity field is absent or empty.
pub const MISSING_FIELDS_MESSAGE: &str =
    "All fields (name, birthDay, birthMonth, birthYear and country) are required";

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Require every identity field to be present and non-empty.
///
/// Whitespace-only values count as present; only the empty string is rejected.
pub fn validate(request: CheckRequest) -> Result<SubmissionInput, ScreeningError> {
    let CheckRequest {
        full_name,
        birth_day,
        birth_month,
        birth_year,
        country,
    } = request;

    match (
        present(full_name),
        present(birth_year),
        present(country),
        present(birth_month),
        present(birth_day),
    ) {
        (
            Some(full_name),
            Some(birth_year),
            Some(country),
            Some(birth_month),
            Some(birth_day),
        ) => Ok(SubmissionInput {
            full_name,
            birth_day,
            birth_month,
            birth_year,
            country,
        }),
        _ => Err(ScreeningError::MissingFields),
    }
}

/// Left-pad a single-character day or month with `0`. Longer values pass through.
pub fn pad_component(value: &str) -> String {
    if value.chars().count() == 1 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

/// `YYYY-MM-DD` with day and month padded to two digits.
pub fn compose_dob(input: &SubmissionInput) -> String {
    format!(
        "{}-{}-{}",
        input.birth_year,
        pad_component(&input.birth_month),
        pad_component(&input.birth_day)
    )
}
