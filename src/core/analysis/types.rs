//! Clause and document types produced by contract analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AnalysisError;

/// Identifier of a clause, unique within one document.
pub type ClauseId = u32;

// ============================================================================
// Risk Level
// ============================================================================

/// Three-level severity attached to every clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Display label, e.g. "Medium risk".
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk",
            RiskLevel::Medium => "Medium risk",
            RiskLevel::High => "High risk",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Single-glyph indicator shown next to the label.
    pub fn icon(self) -> &'static str {
        match self {
            RiskLevel::Low => "✓",
            RiskLevel::Medium => "⚠",
            RiskLevel::High => "✗",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a risk label.
///
/// Accepts bare level names (`"High"`) as well as decorated display labels
/// such as `"🟡 Medium risk"`. Matching is case-insensitive and checks Low,
/// then Medium, then High.
impl FromStr for RiskLevel {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        if lower.contains("low") {
            Ok(RiskLevel::Low)
        } else if lower.contains("medium") {
            Ok(RiskLevel::Medium)
        } else if lower.contains("high") {
            Ok(RiskLevel::High)
        } else {
            Err(AnalysisError::UnknownRiskLabel(s.to_string()))
        }
    }
}

impl TryFrom<String> for RiskLevel {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.as_str().to_string()
    }
}

// ============================================================================
// Clause
// ============================================================================

/// One contractual provision with its (canned) risk assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub id: ClauseId,
    pub title: String,
    pub text: String,
    pub risk: RiskLevel,
    /// Severity on a 0-10 scale.
    pub risk_score: u8,
    pub category: String,
    #[serde(default)]
    pub advisory: String,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub suggested_alternative: String,
}

// ============================================================================
// Document
// ============================================================================

/// How a document entered the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentOrigin {
    /// Chosen through the path picker.
    Picked,
    /// Dropped onto the terminal (bracketed paste of a path).
    Dropped,
    /// Raw contract text pasted into the text area.
    Pasted,
}

impl DocumentOrigin {
    pub fn label(self) -> &'static str {
        match self {
            DocumentOrigin::Picked => "picked",
            DocumentOrigin::Dropped => "dropped",
            DocumentOrigin::Pasted => "pasted",
        }
    }
}

/// Clause counts per risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskSummary {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskSummary {
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// A submitted contract and its clause analysis. Lives only for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: Uuid,
    pub file_name: String,
    pub origin: DocumentOrigin,
    pub clauses: Vec<Clause>,
}

impl Document {
    pub fn new(file_name: impl Into<String>, origin: DocumentOrigin, clauses: Vec<Clause>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            origin,
            clauses,
        }
    }

    pub fn clause(&self, id: ClauseId) -> Option<&Clause> {
        self.clauses.iter().find(|c| c.id == id)
    }

    pub fn clause_index(&self, id: ClauseId) -> Option<usize> {
        self.clauses.iter().position(|c| c.id == id)
    }

    pub fn risk_summary(&self) -> RiskSummary {
        self.clauses
            .iter()
            .fold(RiskSummary::default(), |mut acc, clause| {
                match clause.risk {
                    RiskLevel::Low => acc.low += 1,
                    RiskLevel::Medium => acc.medium += 1,
                    RiskLevel::High => acc.high += 1,
                }
                acc
            })
    }

    /// Highest risk level among the clauses, if any.
    pub fn highest_risk(&self) -> Option<RiskLevel> {
        self.clauses.iter().map(|c| c.risk).max()
    }
}
