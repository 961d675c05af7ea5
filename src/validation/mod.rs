//! Recording validation for yogaform.
//!
//! Pose rules assume every joint they read is present and well-formed.
//! This module checks that precondition ahead of analysis and flags frames
//! whose feedback is likely to be noise:
//! - Missing or non-finite joints (errors)
//! - Off-frame or low-confidence joints, empty frames (warnings)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use crate::landmark::{BodyLandmark, LandmarkSet, Recording};
use crate::pose::{PosePoints, PoseSelection};

/// Default minimum visibility, matching the detector's confidence gate.
pub const DEFAULT_MIN_VISIBILITY: f64 = 0.5;

/// Options for validation behavior.
#[derive(Clone, Debug)]
pub struct ValidateOptions {
    /// The pose frames will be analyzed against. With `None` no joints are
    /// required.
    pub selection: PoseSelection,

    /// Visibility scores below this are reported.
    pub min_visibility: f64,

    /// If true, treat warnings as errors.
    pub strict: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            selection: PoseSelection::None,
            min_visibility: DEFAULT_MIN_VISIBILITY,
            strict: false,
        }
    }
}

/// Validates a recording and returns a report of all issues found.
pub fn validate_recording(recording: &Recording, opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    if recording.frames.is_empty() {
        report.add(ValidationIssue::warning(
            IssueCode::EmptyRecording,
            "Recording has no frames",
            IssueContext::Recording,
        ));
        return report;
    }

    for (index, frame) in recording.frames.iter().enumerate() {
        match &frame.landmarks {
            None => report.add(ValidationIssue::warning(
                IssueCode::NoPersonDetected,
                "No person detected",
                IssueContext::Frame { index },
            )),
            Some(landmarks) => validate_frame(index, landmarks, opts, &mut report),
        }
    }

    report
}

/// Validates one detection.
fn validate_frame(
    index: usize,
    landmarks: &LandmarkSet,
    opts: &ValidateOptions,
    report: &mut ValidationReport,
) {
    let required: &[BodyLandmark] = if opts.selection.pose().is_some() {
        &PosePoints::REQUIRED
    } else {
        &[]
    };

    for &landmark in required {
        if !landmarks.contains(landmark) {
            report.add(ValidationIssue::error(
                IssueCode::MissingLandmark,
                format!("{} needs {}, which was not detected", opts.selection, landmark),
                IssueContext::Landmark {
                    frame: index,
                    landmark,
                },
            ));
        }
    }

    for (landmark, lm) in landmarks.iter() {
        let context = IssueContext::Landmark {
            frame: index,
            landmark,
        };

        let coord = lm.coord();
        if !coord.is_finite() {
            report.add(ValidationIssue::error(
                IssueCode::NonFiniteCoordinate,
                format!("Non-finite coordinates ({}, {})", lm.x, lm.y),
                context,
            ));
            // Range and visibility checks need a finite position.
            continue;
        }

        if !coord.is_in_frame() {
            report.add(ValidationIssue::warning(
                IssueCode::OutOfFrame,
                format!("Position ({:.3}, {:.3}) lies outside the frame", lm.x, lm.y),
                context.clone(),
            ));
        }

        if let Some(visibility) = lm.visibility {
            if visibility < opts.min_visibility {
                report.add(ValidationIssue::warning(
                    IssueCode::LowVisibility,
                    format!(
                        "Visibility {:.2} is below {:.2}",
                        visibility, opts.min_visibility
                    ),
                    context,
                ));
            }
        }
    }
}
