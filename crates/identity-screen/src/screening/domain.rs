use serde::{Deserialize, Deserializer, Serialize};

use super::normalize::compose_dob;

/// Minimum provider confidence score for a list entry to count as a match.
pub const MIN_SCORE: u8 = 95;

/// Watch lists every case is screened against.
pub const SCREENING_SOURCES: [&str; 10] = [
    "sdn", "nonsdn", "un", "ofsi", "eu", "dpl", "sema", "bfs", "mxsat", "lfiu",
];

/// Identity fields collected by the intake form, all present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInput {
    pub full_name: String,
    pub birth_day: String,
    pub birth_month: String,
    pub birth_year: String,
    pub country: String,
}

/// Inbound `/api/check` body before presence validation.
///
/// Fields accept JSON strings, numbers or booleans. Absent fields, `null`, `0`
/// and `false` decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub birth_day: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub birth_month: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub birth_year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub country: Option<String>,
}

impl From<SubmissionInput> for CheckRequest {
    fn from(input: SubmissionInput) -> Self {
        Self {
            full_name: Some(input.full_name),
            birth_day: Some(input.birth_day),
            birth_month: Some(input.birth_month),
            birth_year: Some(input.birth_year),
            country: Some(input.country),
        }
    }
}

fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Bool(bool),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
    }

    let value = Option::<Text>::deserialize(deserializer)?;
    Ok(value.and_then(|text| match text {
        Text::Str(value) => Some(value),
        Text::Bool(false) | Text::Unsigned(0) | Text::Signed(0) => None,
        Text::Bool(true) => Some(true.to_string()),
        Text::Unsigned(value) => Some(value.to_string()),
        Text::Signed(value) => Some(value.to_string()),
        Text::Float(value) if value == 0.0 || value.is_nan() => None,
        Text::Float(value) => Some(value.to_string()),
    }))
}

/// Outbound body for the screening provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRequest {
    pub min_score: u8,
    pub sources: Vec<&'static str>,
    pub cases: Vec<ScreeningCase>,
}

/// A single identity to screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningCase {
    pub name: String,
    pub nationality: String,
    pub dob: String,
    pub citizenship: String,
}

impl ScreeningRequest {
    /// Build the fixed-configuration request for one validated submission.
    ///
    /// The form collects a single country, which fills both `nationality` and
    /// `citizenship`.
    pub fn for_submission(input: &SubmissionInput) -> Self {
        Self {
            min_score: MIN_SCORE,
            sources: SCREENING_SOURCES.to_vec(),
            cases: vec![ScreeningCase {
                name: input.full_name.clone(),
                nationality: input.country.clone(),
                dob: compose_dob(input),
                citizenship: input.country.clone(),
            }],
        }
    }
}

/// Aggregate outcome of a screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreeningStatus {
    Clear,
    Hit,
}

impl ScreeningStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Hit => "Hit",
        }
    }
}

/// Which submitted fields contributed to at least one provider match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBreakdown {
    pub name: bool,
    pub dob: bool,
    pub country: bool,
}

impl FieldBreakdown {
    /// OR a provider match field into the breakdown. Unrecognized names are ignored.
    pub fn record(&mut self, field_name: &str) {
        match field_name {
            "Name" => self.name = true,
            "DOB" => self.dob = true,
            "Citizenship" => self.country = true,
            _ => {}
        }
    }

    pub fn any(&self) -> bool {
        self.name || self.dob || self.country
    }

    /// Rows in wire order: name, dob, country.
    pub fn rows(&self) -> [(&'static str, bool); 3] {
        [
            ("name", self.name),
            ("dob", self.dob),
            ("country", self.country),
        ]
    }
}

/// Response body returned by `/api/check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub status: ScreeningStatus,
    pub screening_results: FieldBreakdown,
}

impl ScreeningResult {
    pub fn clear() -> Self {
        Self {
            status: ScreeningStatus::Clear,
            screening_results: FieldBreakdown::default(),
        }
    }

    pub fn hit(screening_results: FieldBreakdown) -> Self {
        Self {
            status: ScreeningStatus::Hit,
            screening_results,
        }
    }
}
