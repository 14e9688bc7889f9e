use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::{Datelike, Local};
use tracing::debug;

use super::client::ClientError;
use crate::screening::{FieldBreakdown, ScreeningResult, ScreeningStatus, SubmissionInput};

/// Earliest birth year offered by the form.
pub const EARLIEST_BIRTH_YEAR: i32 = 1920;

/// Inputs collected by the intake form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FullName,
    BirthDay,
    BirthMonth,
    BirthYear,
    Country,
}

impl FormField {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::FullName,
            Self::BirthDay,
            Self::BirthMonth,
            Self::BirthYear,
            Self::Country,
        ]
    }

    /// Wire name used in the submission body.
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::BirthDay => "birthDay",
            Self::BirthMonth => "birthMonth",
            Self::BirthYear => "birthYear",
            Self::Country => "country",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "full name",
            Self::BirthDay => "birth day",
            Self::BirthMonth => "birth month",
            Self::BirthYear => "birth year",
            Self::Country => "country",
        }
    }

    pub fn required_message(self) -> String {
        format!("Please enter your {}", self.label())
    }
}

/// What the form shows after a submission round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Clear,
    Hit(FieldBreakdown),
    Failed,
}

impl From<ScreeningResult> for SubmissionOutcome {
    fn from(result: ScreeningResult) -> Self {
        match result.status {
            ScreeningStatus::Clear => Self::Clear,
            ScreeningStatus::Hit => Self::Hit(result.screening_results),
        }
    }
}

/// Raised when a caller asks to submit a form that is not ready.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form is incomplete: missing {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

/// Field values, per-field errors, and the last submission outcome.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: SubmissionInput,
    errors: BTreeMap<FormField, String>,
    submit_enabled: bool,
    outcome: Option<SubmissionOutcome>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a field value and recompute its error and the submit guard.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();

        if value.is_empty() {
            self.errors.insert(field, field.required_message());
        } else {
            self.errors.remove(&field);
        }

        *self.slot_mut(field) = value;
        self.submit_enabled = self.missing_fields().is_empty();
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FullName => &self.input.full_name,
            FormField::BirthDay => &self.input.birth_day,
            FormField::BirthMonth => &self.input.birth_month,
            FormField::BirthYear => &self.input.birth_year,
            FormField::Country => &self.input.country,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FullName => &mut self.input.full_name,
            FormField::BirthDay => &mut self.input.birth_day,
            FormField::BirthMonth => &mut self.input.birth_month,
            FormField::BirthYear => &mut self.input.birth_year,
            FormField::Country => &mut self.input.country,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Fields whose trimmed value is empty.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ordered()
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Reset errors and the previous outcome, then hand out the payload to send.
    ///
    /// Returns `None` while submission is disabled.
    pub fn begin_submit(&mut self) -> Option<SubmissionInput> {
        self.errors.clear();
        self.outcome = None;

        if self.submit_enabled {
            Some(self.input.clone())
        } else {
            None
        }
    }

    /// Like [`FormState::begin_submit`] but reports which fields block submission.
    pub fn try_begin_submit(&mut self) -> Result<SubmissionInput, FormError> {
        let missing = self.missing_fields();
        self.begin_submit().ok_or_else(|| FormError::Incomplete {
            missing: missing.into_iter().map(FormField::key).collect(),
        })
    }

    pub fn record_response(&mut self, response: Result<ScreeningResult, ClientError>) {
        let outcome = match response {
            Ok(result) => SubmissionOutcome::from(result),
            Err(err) => {
                debug!(error = %err, "screening submission failed");
                SubmissionOutcome::Failed
            }
        };
        self.outcome = Some(outcome);
    }

    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        self.outcome.as_ref()
    }

    pub fn year_options() -> Vec<i32> {
        years_through(Local::now().year())
    }

    pub fn month_options() -> RangeInclusive<u8> {
        1..=12
    }

    pub fn day_options() -> RangeInclusive<u8> {
        1..=31
    }
}

/// Birth years from `current_year` down to [`EARLIEST_BIRTH_YEAR`].
pub fn years_through(current_year: i32) -> Vec<i32> {
    (EARLIEST_BIRTH_YEAR..=current_year).rev().collect()
}
