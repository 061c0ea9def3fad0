//! Contract analysis.
//!
//! There is no real analysis engine yet. [`SampleAnalyzer`] stamps a fixed
//! clause template with the submitted file's name; anything that implements
//! [`ClauseAnalyzer`] can replace it without touching the session or views.

pub mod errors;
pub mod template;
pub mod types;

pub use errors::AnalysisError;
pub use template::{ClauseTemplate, SampleAnalyzer};
pub use types::{Clause, ClauseId, Document, DocumentOrigin, RiskLevel, RiskSummary};

use super::intake::IntakeSource;

/// Turns a submitted contract into an analysed [`Document`].
pub trait ClauseAnalyzer {
    fn analyze(&self, source: &IntakeSource) -> Document;
}
