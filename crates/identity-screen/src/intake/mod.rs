//! Intake form state, the proxy client, and result rendering.

pub mod client;
pub mod form;
pub mod view;

pub use client::{ClientError, ProxyClient};
pub use form::{years_through, FormError, FormField, FormState, SubmissionOutcome};
pub use view::{ResultRow, ResultView};
