//! Per-user analysis session.
//!
//! The pose selection is owned by a [`Session`] and passed into every
//! analysis call, rather than living in process-wide state. Changing it
//! needs `&mut Session`, so a frame is always analyzed against exactly one
//! selection.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::YogaformError;
use crate::landmark::{BodyLandmark, Frame, LandmarkSet};
use crate::pose::{self, PosePoints, PoseSelection, Thresholds, Tip, YogaPose};

/// The JSON feedback payload for one frame.
///
/// `is_correct` is true exactly when `feedback` is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: Vec<String>,
    pub is_correct: bool,
    pub current_pose: String,
}

impl FeedbackResponse {
    pub fn new(tips: &[Tip], selection: PoseSelection) -> Self {
        Self {
            feedback: pose::messages(tips),
            is_correct: tips.is_empty(),
            current_pose: selection.label().to_string(),
        }
    }
}

/// What a key press in the live view asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotkeyAction {
    Selected(YogaPose),
    Quit,
    Ignored,
}

/// How a single recorded frame was handled.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Rules ran (possibly none, if no pose is selected).
    Analyzed { tips: Vec<Tip> },
    /// The detector found nobody in the frame.
    NoPerson,
    /// The rules couldn't run, normally because a joint was missing.
    Skipped { missing: Option<BodyLandmark> },
}

/// Pose selection and thresholds for one user.
#[derive(Clone, Debug, Default)]
pub struct Session {
    selection: PoseSelection,
    thresholds: Thresholds,
}

impl Session {
    /// A session with no pose selected and default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self {
            selection: PoseSelection::None,
            thresholds,
        }
    }

    pub fn selection(&self) -> PoseSelection {
        self.selection
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn select(&mut self, selection: impl Into<PoseSelection>) {
        let selection = selection.into();
        if selection != self.selection {
            info!("pose selection: {} -> {}", self.selection, selection);
        }
        self.selection = selection;
    }

    /// Selects a pose by key (`warrior2`, `tree`, `triangle`, `none`).
    ///
    /// # Errors
    /// Returns [`YogaformError::UnknownPose`] and leaves the selection
    /// unchanged if the key is not recognized.
    pub fn select_by_key(&mut self, key: &str) -> Result<PoseSelection, YogaformError> {
        let selection: PoseSelection = key.parse()?;
        self.select(selection);
        Ok(selection)
    }

    /// Handles a live-view key press: `1`-`3` pick a pose, `q` quits.
    pub fn apply_hotkey(&mut self, key: char) -> HotkeyAction {
        if key.eq_ignore_ascii_case(&'q') {
            return HotkeyAction::Quit;
        }
        match YogaPose::from_hotkey(key) {
            Some(pose) => {
                self.select(pose);
                HotkeyAction::Selected(pose)
            }
            None => HotkeyAction::Ignored,
        }
    }

    pub fn current_pose_label(&self) -> &'static str {
        self.selection.label()
    }

    /// Runs the selected pose's rules over one detection.
    pub fn tips(&self, landmarks: &LandmarkSet) -> Result<Vec<Tip>, YogaformError> {
        let tips = pose::analyze_with(self.selection, landmarks, &self.thresholds)?;
        debug!("{}: {} tip(s)", self.selection, tips.len());
        Ok(tips)
    }

    /// Builds the feedback payload for one frame.
    ///
    /// `None` means the detector found no person; there is nothing to
    /// judge, so the result is `Ok(None)` rather than a verdict.
    ///
    /// # Errors
    /// Returns [`YogaformError::MissingLandmark`] if a pose is selected and
    /// the detection lacks a joint its rules read.
    pub fn analyze(
        &self,
        landmarks: Option<&LandmarkSet>,
    ) -> Result<Option<FeedbackResponse>, YogaformError> {
        let Some(landmarks) = landmarks else {
            return Ok(None);
        };
        let tips = self.tips(landmarks)?;
        Ok(Some(FeedbackResponse::new(&tips, self.selection)))
    }

    /// Classifies one recorded frame, logging frames that can't be judged.
    pub fn evaluate_frame(&self, index: usize, frame: &Frame) -> FrameOutcome {
        let Some(landmarks) = &frame.landmarks else {
            debug!("frame {}: no person detected", index);
            return FrameOutcome::NoPerson;
        };

        match self.tips(landmarks) {
            Ok(tips) => FrameOutcome::Analyzed { tips },
            Err(err) => {
                warn!("frame {}: skipped, {}", index, err);
                FrameOutcome::Skipped {
                    missing: PosePoints::first_missing(landmarks),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmark;

    #[test]
    fn test_new_session_has_no_pose() {
        let session = Session::new();
        assert_eq!(session.selection(), PoseSelection::None);
        assert_eq!(session.current_pose_label(), "None");
    }

    #[test]
    fn test_unknown_key_keeps_previous_selection() {
        let mut session = Session::new();
        session.select_by_key("tree").expect("select tree");

        let err = session.select_by_key("lotus").expect_err("should reject");
        assert!(matches!(err, YogaformError::UnknownPose(ref k) if k == "lotus"));
        assert_eq!(session.selection(), PoseSelection::Tree);
    }

    #[test]
    fn test_hotkeys() {
        let mut session = Session::new();
        assert_eq!(session.apply_hotkey('2'), HotkeyAction::Selected(YogaPose::Tree));
        assert_eq!(session.current_pose_label(), "Tree Pose");
        assert_eq!(session.apply_hotkey('x'), HotkeyAction::Ignored);
        assert_eq!(session.selection(), PoseSelection::Tree);
        assert_eq!(session.apply_hotkey('Q'), HotkeyAction::Quit);
    }

    #[test]
    fn test_no_person_is_not_a_verdict() {
        let mut session = Session::new();
        session.select(YogaPose::Warrior2);
        assert_eq!(session.analyze(None).expect("analyze"), None);
    }

    #[test]
    fn test_no_pose_selected_is_correct() {
        let session = Session::new();
        let set = LandmarkSet::new().with(BodyLandmark::Nose, Landmark::new(0.5, 0.1));

        let response = session.analyze(Some(&set)).expect("analyze").expect("response");
        assert!(response.feedback.is_empty());
        assert!(response.is_correct);
        assert_eq!(response.current_pose, "None");
    }

    #[test]
    fn test_feedback_response_shape() {
        let response = FeedbackResponse::new(
            &[Tip::WidenStance, Tip::AlignArms],
            PoseSelection::Triangle,
        );
        let json = serde_json::to_value(&response).expect("serialize");

        assert_eq!(
            json,
            serde_json::json!({
                "feedback": ["Widen your stance", "Align arms in a vertical line"],
                "is_correct": false,
                "current_pose": "Triangle Pose",
            })
        );
    }

    #[test]
    fn test_evaluate_frame_outcomes() {
        let mut session = Session::new();
        session.select(YogaPose::Tree);

        assert_eq!(
            session.evaluate_frame(0, &Frame::empty()),
            FrameOutcome::NoPerson
        );

        let partial = LandmarkSet::new().with(BodyLandmark::RightShoulder, Landmark::new(0.4, 0.3));
        assert_eq!(
            session.evaluate_frame(1, &Frame::detected(partial)),
            FrameOutcome::Skipped {
                missing: Some(BodyLandmark::RightHip)
            }
        );
    }
}
