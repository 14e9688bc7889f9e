use std::fmt;

use super::form::SubmissionOutcome;

pub const MATCH_GLYPH: &str = "✅";
pub const NO_MATCH_GLYPH: &str = "❌";
pub const CLEAR_HEADLINE: &str = "Clear";
pub const FAILURE_NOTICE: &str = "Screening failed. Please try again.";

/// One line of the hit breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    pub field: &'static str,
    pub glyph: &'static str,
}

/// Rendered state of the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Empty,
    Clear,
    Hit(Vec<ResultRow>),
    Failure,
}

impl ResultView {
    pub fn from_outcome(outcome: Option<&SubmissionOutcome>) -> Self {
        match outcome {
            None => Self::Empty,
            Some(SubmissionOutcome::Clear) => Self::Clear,
            Some(SubmissionOutcome::Failed) => Self::Failure,
            Some(SubmissionOutcome::Hit(breakdown)) => Self::Hit(
                breakdown
                    .rows()
                    .into_iter()
                    .map(|(field, matched)| ResultRow {
                        field,
                        glyph: if matched { MATCH_GLYPH } else { NO_MATCH_GLYPH },
                    })
                    .collect(),
            ),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Clear => vec![CLEAR_HEADLINE.to_string()],
            Self::Failure => vec![FAILURE_NOTICE.to_string()],
            Self::Hit(rows) => rows
                .iter()
                .map(|row| format!("{}: {}", row.field, row.glyph))
                .collect(),
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
