//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `steps` helpers (for example `StepText`) that strip quotes from
//! values captured in scenario text.
pub mod steps;
