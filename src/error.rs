use std::path::PathBuf;
use thiserror::Error;

use crate::landmark::BodyLandmark;
use crate::validation::ValidationReport;

/// The main error type for yogaform operations.
#[derive(Debug, Error)]
pub enum YogaformError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse landmark JSON from {path}: {source}")]
    LandmarkJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write landmark JSON to {path}: {source}")]
    LandmarkJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse landmark CSV from {path}: {source}")]
    LandmarkCsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write landmark CSV to {path}: {source}")]
    LandmarkCsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid landmark CSV in {path}: {message}")]
    LandmarkCsvInvalid { path: PathBuf, message: String },

    #[error("Failed to load thresholds from {path}: {message}")]
    ThresholdsParse { path: PathBuf, message: String },

    #[error("Missing landmark: {landmark}")]
    MissingLandmark { landmark: BodyLandmark },

    #[error("Unknown pose '{0}' (expected warrior2, tree, triangle, or none)")]
    UnknownPose(String),

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Failed to serialize output: {0}")]
    OutputJson(#[source] serde_json::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
