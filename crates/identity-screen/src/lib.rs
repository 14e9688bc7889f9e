//! Identity intake and sanctions watch-list screening.
//!
//! The [`screening`] module is the proxy that normalizes submissions, calls the
//! screening provider, and reduces its matches into per-field flags. The
//! [`intake`] module is the form-side client that gathers the identity fields,
//! submits them to the proxy, and renders the outcome.

pub mod config;
pub mod error;
pub mod intake;
pub mod screening;
pub mod telemetry;
