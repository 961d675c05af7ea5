//! JSON serialization for landmark recordings.
//!
//! The layout mirrors what a pose model emits per frame, keyed by joint name:
//!
//! ```json
//! {"frames": [
//!   {"landmarks": {"right_shoulder": {"x": 0.45, "y": 0.3, "visibility": 0.98}}},
//!   {"landmarks": null}
//! ]}
//! ```
//!
//! A `null` (or absent) `landmarks` field means no person was detected.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::model::Recording;
use crate::error::YogaformError;

/// Reads a recording from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_recording_json(path: &Path) -> Result<Recording, YogaformError> {
    let file = File::open(path).map_err(YogaformError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| YogaformError::LandmarkJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a recording to a JSON file (pretty-printed).
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_recording_json(path: &Path, recording: &Recording) -> Result<(), YogaformError> {
    let file = File::create(path).map_err(YogaformError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, recording).map_err(|source| {
        YogaformError::LandmarkJsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Reads a recording from a JSON string.
pub fn from_json_str(json: &str) -> Result<Recording, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a recording from raw JSON bytes.
///
/// Useful for fuzzing and for payloads that were never validated as UTF-8.
pub fn from_json_slice(bytes: &[u8]) -> Result<Recording, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes a recording to a pretty-printed JSON string.
pub fn to_json_string(recording: &Recording) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(recording)
}
