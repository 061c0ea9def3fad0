//! Clause templates and the sample analyzer built on them.
//!
//! The bundled employment-contract template is compiled in via
//! `include_str!`. A custom template may be loaded from disk (YAML, or JSON
//! when the file ends in `.json`).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::AnalysisError;
use super::types::{Clause, Document};
use super::ClauseAnalyzer;
use crate::core::intake::IntakeSource;

const BUNDLED_EMPLOYMENT_CONTRACT: &str =
    include_str!("../../../assets/templates/employment_contract.yaml");

/// Name reported for the bundled template.
pub const BUNDLED_TEMPLATE_NAME: &str = "Sample_Employment_Contract.pdf";

const MAX_RISK_SCORE: u8 = 10;

// ============================================================================
// ClauseTemplate
// ============================================================================

/// A fixed clause list that every submitted document is stamped from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseTemplate {
    pub name: String,
    pub clauses: Vec<Clause>,
}

impl ClauseTemplate {
    /// The compiled-in employment contract sample.
    pub fn bundled() -> Result<Self, AnalysisError> {
        Self::from_yaml(BUNDLED_TEMPLATE_NAME, BUNDLED_EMPLOYMENT_CONTRACT)
    }

    pub fn from_yaml(name: &str, source: &str) -> Result<Self, AnalysisError> {
        let template: Self =
            serde_yaml_ng::from_str(source).map_err(|source| AnalysisError::YamlParse {
                name: name.to_string(),
                source,
            })?;
        template.validate()?;
        Ok(template)
    }

    pub fn from_json(name: &str, source: &str) -> Result<Self, AnalysisError> {
        let template: Self =
            serde_json::from_str(source).map_err(|source| AnalysisError::JsonParse {
                name: name.to_string(),
                source,
            })?;
        template.validate()?;
        Ok(template)
    }

    /// Load a template file, choosing the format by extension.
    pub fn from_path(path: &Path) -> Result<Self, AnalysisError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::read_failed(path, e))?;
        let name = path.display().to_string();

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let template = if is_json {
            Self::from_json(&name, &source)?
        } else {
            Self::from_yaml(&name, &source)?
        };
        log::info!(
            "Loaded clause template {} ({} clauses)",
            path.display(),
            template.clauses.len()
        );
        Ok(template)
    }

    fn validate(&self) -> Result<(), AnalysisError> {
        if self.clauses.is_empty() {
            return Err(AnalysisError::EmptyTemplate {
                name: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for clause in &self.clauses {
            if !seen.insert(clause.id) {
                return Err(AnalysisError::DuplicateClauseId {
                    name: self.name.clone(),
                    id: clause.id,
                });
            }
            if clause.risk_score > MAX_RISK_SCORE {
                return Err(AnalysisError::ScoreOutOfRange {
                    name: self.name.clone(),
                    id: clause.id,
                    score: clause.risk_score,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// SampleAnalyzer
// ============================================================================

/// Demo analyzer: ignores document content and returns the template clauses.
#[derive(Debug, Clone)]
pub struct SampleAnalyzer {
    template: ClauseTemplate,
}

impl SampleAnalyzer {
    pub fn new(template: ClauseTemplate) -> Self {
        Self { template }
    }

    pub fn bundled() -> Result<Self, AnalysisError> {
        ClauseTemplate::bundled().map(Self::new)
    }

    pub fn template(&self) -> &ClauseTemplate {
        &self.template
    }
}

impl ClauseAnalyzer for SampleAnalyzer {
    fn analyze(&self, source: &IntakeSource) -> Document {
        let file_name = source.file_name();
        log::debug!(
            "Stamping sample analysis of {} with template {}",
            file_name,
            self.template.name
        );
        Document::new(file_name, source.origin(), self.template.clauses.clone())
    }
}
