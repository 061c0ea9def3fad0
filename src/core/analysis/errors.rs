//! Analysis error types.

use std::path::PathBuf;

use thiserror::Error;

use super::types::ClauseId;

/// Errors raised while loading or validating clause templates.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Template file could not be read.
    #[error("Failed to read clause template from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template YAML is malformed.
    #[error("Failed to parse clause template '{name}' as YAML: {source}")]
    YamlParse {
        name: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Template JSON is malformed.
    #[error("Failed to parse clause template '{name}' as JSON: {source}")]
    JsonParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Template parsed but lists no clauses.
    #[error("Clause template '{name}' contains no clauses")]
    EmptyTemplate { name: String },

    /// Two clauses share an id.
    #[error("Clause template '{name}' repeats clause id {id}")]
    DuplicateClauseId { name: String, id: ClauseId },

    /// Risk score outside the 0-10 scale.
    #[error("Clause {id} in template '{name}' has risk score {score}, expected 0-10")]
    ScoreOutOfRange { name: String, id: ClauseId, score: u8 },

    /// Risk label matched none of Low / Medium / High.
    #[error("Unknown risk label '{0}' (expected Low, Medium or High)")]
    UnknownRiskLabel(String),
}

impl AnalysisError {
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }
}
