//! CSV format reader and writer for landmark recordings.
//!
//! # Layout
//!
//! One row per detected joint, with columns:
//! - `frame`: zero-based frame number
//! - `landmark`: snake_case joint name (e.g. `right_shoulder`)
//! - `x`, `y`: normalized coordinates
//! - `z`, `visibility`: optional, may be left empty
//!
//! A row whose `landmark` field is empty marks a frame where no person was
//! detected; its coordinate columns are ignored.
//!
//! Frame numbers must cover `0..n` without gaps, in any row order. Within
//! a frame, rows are written in model index order.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::body::BodyLandmark;
use super::model::{Frame, Landmark, LandmarkSet, Recording};
use crate::error::YogaformError;

/// A single row in the landmark CSV format.
#[derive(Debug, Serialize, Deserialize)]
struct LandmarkRow {
    frame: usize,
    landmark: String,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    visibility: Option<f64>,
}

/// Per-frame accumulator while grouping rows.
#[derive(Default)]
struct FrameRows {
    no_person: bool,
    landmarks: LandmarkSet,
}

/// Reads a recording from a landmark CSV file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if rows are
/// inconsistent (unknown joints, duplicate joints, frame gaps).
pub fn read_recording_csv(path: &Path) -> Result<Recording, YogaformError> {
    let file = File::open(path).map_err(YogaformError::Io)?;
    let reader = BufReader::new(file);

    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.deserialize() {
        let row: LandmarkRow = result.map_err(|source| YogaformError::LandmarkCsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }

    rows_to_recording(rows, path)
}

/// Writes a recording to a landmark CSV file.
pub fn write_recording_csv(path: &Path, recording: &Recording) -> Result<(), YogaformError> {
    let file = File::create(path).map_err(YogaformError::Io)?;
    let writer = BufWriter::new(file);

    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in recording_to_rows(recording) {
        csv_writer
            .serialize(&row)
            .map_err(|source| YogaformError::LandmarkCsvWrite {
                path: path.to_path_buf(),
                source,
            })?;
    }

    csv_writer
        .into_inner()
        .map_err(|e| YogaformError::Io(e.into_error()))?
        .flush()
        .map_err(YogaformError::Io)?;

    Ok(())
}

/// Reads a recording from a CSV string.
pub fn from_csv_str(csv_str: &str) -> Result<Recording, YogaformError> {
    from_csv_slice(csv_str.as_bytes())
}

/// Reads a recording from CSV bytes.
///
/// Useful for fuzzing and processing raw bytes without requiring UTF-8 upfront.
pub fn from_csv_slice(bytes: &[u8]) -> Result<Recording, YogaformError> {
    let mut csv_reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    let dummy_path = Path::new("<bytes>");

    for result in csv_reader.deserialize() {
        let row: LandmarkRow = result.map_err(|source| YogaformError::LandmarkCsvParse {
            path: dummy_path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }

    rows_to_recording(rows, dummy_path)
}

/// Writes a recording to a CSV string.
pub fn to_csv_string(recording: &Recording) -> Result<String, YogaformError> {
    let dummy_path = Path::new("<string>");

    let mut csv_writer = csv::Writer::from_writer(Vec::new());
    for row in recording_to_rows(recording) {
        csv_writer
            .serialize(&row)
            .map_err(|source| YogaformError::LandmarkCsvWrite {
                path: dummy_path.to_path_buf(),
                source,
            })?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| YogaformError::Io(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| YogaformError::LandmarkCsvInvalid {
        path: dummy_path.to_path_buf(),
        message: format!("Invalid UTF-8 in output: {}", e),
    })
}

fn rows_to_recording(rows: Vec<LandmarkRow>, path: &Path) -> Result<Recording, YogaformError> {
    let invalid = |message: String| YogaformError::LandmarkCsvInvalid {
        path: path.to_path_buf(),
        message,
    };

    let mut frames: BTreeMap<usize, FrameRows> = BTreeMap::new();

    for (idx, row) in rows.into_iter().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let entry = frames.entry(row.frame).or_default();

        if row.landmark.trim().is_empty() {
            entry.no_person = true;
        } else {
            let joint: BodyLandmark = row
                .landmark
                .parse()
                .map_err(|e| invalid(format!("line {}: {}", line, e)))?;

            let (x, y) = match (row.x, row.y) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    return Err(invalid(format!(
                        "line {}: landmark '{}' is missing x or y",
                        line, joint
                    )))
                }
            };

            let landmark = Landmark {
                x,
                y,
                z: row.z,
                visibility: row.visibility,
            };
            if entry.landmarks.insert(joint, landmark).is_some() {
                return Err(invalid(format!(
                    "line {}: duplicate landmark '{}' in frame {}",
                    line, joint, row.frame
                )));
            }
        }

        if entry.no_person && !entry.landmarks.is_empty() {
            return Err(invalid(format!(
                "frame {} is marked as having no person but also has landmarks",
                row.frame
            )));
        }
    }

    if let Some((&last, _)) = frames.last_key_value() {
        // Non-empty here, and `last + 1` could overflow on a hostile frame number.
        if last != frames.len() - 1 {
            let missing = (0..=last)
                .find(|n| !frames.contains_key(n))
                .unwrap_or(last);
            return Err(invalid(format!(
                "frame numbers must be contiguous from 0 (frame {} has no rows)",
                missing
            )));
        }
    }

    let frames = frames
        .into_values()
        .map(|rows| {
            if rows.no_person {
                Frame::empty()
            } else {
                Frame::detected(rows.landmarks)
            }
        })
        .collect();

    Ok(Recording::new(frames))
}

fn recording_to_rows(recording: &Recording) -> Vec<LandmarkRow> {
    let mut rows = Vec::new();

    for (frame, entry) in recording.frames.iter().enumerate() {
        match &entry.landmarks {
            // CSV can't tell an empty detection apart from no detection.
            None => rows.push(no_person_row(frame)),
            Some(set) if set.is_empty() => rows.push(no_person_row(frame)),
            Some(set) => {
                for (joint, lm) in set.iter() {
                    rows.push(LandmarkRow {
                        frame,
                        landmark: joint.name().to_string(),
                        x: Some(lm.x),
                        y: Some(lm.y),
                        z: lm.z,
                        visibility: lm.visibility,
                    });
                }
            }
        }
    }

    rows
}

fn no_person_row(frame: usize) -> LandmarkRow {
    LandmarkRow {
        frame,
        landmark: String::new(),
        x: None,
        y: None,
        z: None,
        visibility: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "frame,landmark,x,y,z,visibility
0,right_shoulder,0.45,0.3,,0.99
0,left_shoulder,0.55,0.3,-0.05,
1,,,,,
2,right_hip,0.45,0.55,,
";

    #[test]
    fn test_parse_sample() {
        let recording = from_csv_str(SAMPLE).expect("parse sample");
        assert_eq!(recording.frames.len(), 3);

        let first = recording.frames[0].landmarks.as_ref().expect("frame 0");
        assert_eq!(first.len(), 2);
        let rs = first.get(BodyLandmark::RightShoulder).expect("right shoulder");
        assert_eq!((rs.x, rs.y, rs.z, rs.visibility), (0.45, 0.3, None, Some(0.99)));
        let ls = first.get(BodyLandmark::LeftShoulder).expect("left shoulder");
        assert_eq!(ls.z, Some(-0.05));

        assert!(!recording.frames[1].is_detected());
        assert!(recording.frames[2].is_detected());
    }

    #[test]
    fn test_roundtrip_through_string() {
        let recording = from_csv_str(SAMPLE).expect("parse sample");
        let csv = to_csv_string(&recording).expect("write csv");
        let restored = from_csv_str(&csv).expect("reparse");
        assert_eq!(recording, restored);
    }

    #[test]
    fn test_unknown_landmark_rejected() {
        let err = from_csv_str("frame,landmark,x,y,z,visibility\n0,tail,0.1,0.1,,\n")
            .expect_err("should reject");
        assert!(err.to_string().contains("unknown landmark"));
    }

    #[test]
    fn test_duplicate_landmark_rejected() {
        let csv = "frame,landmark,x,y,z,visibility
0,nose,0.5,0.1,,
0,nose,0.5,0.2,,
";
        let err = from_csv_str(csv).expect_err("should reject");
        assert!(err.to_string().contains("duplicate landmark"));
    }

    #[test]
    fn test_missing_coordinate_rejected() {
        let err = from_csv_str("frame,landmark,x,y,z,visibility\n0,nose,0.5,,,\n")
            .expect_err("should reject");
        assert!(err.to_string().contains("missing x or y"));
    }

    #[test]
    fn test_conflicting_no_person_rejected() {
        let csv = "frame,landmark,x,y,z,visibility
0,,,,,
0,nose,0.5,0.1,,
";
        let err = from_csv_str(csv).expect_err("should reject");
        assert!(err.to_string().contains("no person"));
    }

    #[test]
    fn test_frame_gap_rejected() {
        let csv = "frame,landmark,x,y,z,visibility
0,nose,0.5,0.1,,
2,nose,0.5,0.1,,
";
        let err = from_csv_str(csv).expect_err("should reject");
        assert!(err.to_string().contains("frame 1 has no rows"));
    }

    #[test]
    fn test_max_frame_number_rejected() {
        let csv = format!(
            "frame,landmark,x,y,z,visibility\n{},nose,0.5,0.1,,\n",
            usize::MAX
        );
        let err = from_csv_str(&csv).expect_err("should reject");
        assert!(err.to_string().contains("frame 0 has no rows"));
    }

    #[test]
    fn test_empty_input_is_empty_recording() {
        let recording = from_csv_str("frame,landmark,x,y,z,visibility\n").expect("parse");
        assert!(recording.frames.is_empty());
    }
}
