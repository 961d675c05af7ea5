//! Layout for the annotated video view.
//!
//! Rendering is done by whatever draws the video; this only decides what
//! goes where (captions and the detected skeleton) in pixel coordinates
//! with the origin at the top-left.

use serde::Serialize;

use crate::landmark::{BodyLandmark, Coord, LandmarkSet, Pixel};
use crate::pose::{PoseSelection, Tip};

/// Left margin for every caption.
pub const MARGIN_X: f64 = 10.0;
/// Baseline of the first tip.
pub const FIRST_TIP_Y: f64 = 30.0;
/// Vertical distance between consecutive lines.
pub const LINE_SPACING: f64 = 30.0;

pub const HELP_TEXT: &str = "Press: 1-Warrior II, 2-Tree Pose, 3-Triangle Pose, Q-Quit";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptionKind {
    Tip,
    Status,
    Help,
}

/// One line of text to draw over a frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Caption {
    pub kind: CaptionKind,
    pub text: String,
    /// Text baseline origin.
    pub position: Coord<Pixel>,
}

/// Lays out captions for one frame of the given height.
///
/// Tips stack down from the top; the current-pose status and the key help
/// sit on the bottom two lines.
pub fn captions(tips: &[Tip], selection: PoseSelection, frame_height: f64) -> Vec<Caption> {
    let mut out: Vec<Caption> = tips
        .iter()
        .enumerate()
        .map(|(i, tip)| Caption {
            kind: CaptionKind::Tip,
            text: tip.message().to_string(),
            position: Coord::new(MARGIN_X, FIRST_TIP_Y + LINE_SPACING * i as f64),
        })
        .collect();

    out.push(Caption {
        kind: CaptionKind::Status,
        text: format!("Current Pose: {}", selection.label()),
        position: Coord::new(MARGIN_X, frame_height - 2.0 * LINE_SPACING),
    });
    out.push(Caption {
        kind: CaptionKind::Help,
        text: HELP_TEXT.to_string(),
        position: Coord::new(MARGIN_X, frame_height - LINE_SPACING),
    });

    out
}

/// An OpenCV-style colour, blue first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bgr(pub u8, pub u8, pub u8);

pub const JOINT_COLOR: Bgr = Bgr(245, 117, 66);
pub const SEGMENT_COLOR: Bgr = Bgr(245, 66, 230);
pub const STROKE_THICKNESS: u32 = 2;
pub const JOINT_RADIUS: u32 = 2;

/// Joints the detector is less sure of than this are not drawn.
pub const MIN_DRAW_VISIBILITY: f64 = 0.5;

/// A joint marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Joint {
    pub landmark: BodyLandmark,
    pub position: Coord<Pixel>,
}

/// A bone drawn between two joints.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: BodyLandmark,
    pub to: BodyLandmark,
    pub start: Coord<Pixel>,
    pub end: Coord<Pixel>,
}

/// The detected skeleton, ready to draw over one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Skeleton {
    pub joints: Vec<Joint>,
    pub segments: Vec<Segment>,
    pub joint_color: Bgr,
    pub segment_color: Bgr,
    pub thickness: u32,
    pub radius: u32,
}

/// Maps a detection onto a frame of the given pixel size.
///
/// Joints with non-finite coordinates or low visibility are left out, along
/// with every segment touching them. Joints without a visibility score are
/// drawn.
pub fn skeleton(landmarks: &LandmarkSet, frame_width: f64, frame_height: f64) -> Skeleton {
    let drawable = |landmark: BodyLandmark| {
        landmarks
            .get(landmark)
            .filter(|lm| lm.coord().is_finite())
            .filter(|lm| lm.visibility.map_or(true, |v| v >= MIN_DRAW_VISIBILITY))
            .map(|lm| lm.coord().to_pixel(frame_width, frame_height))
    };

    let joints = landmarks
        .iter()
        .filter_map(|(landmark, _)| {
            drawable(landmark).map(|position| Joint { landmark, position })
        })
        .collect();

    let segments = BodyLandmark::CONNECTIONS
        .iter()
        .filter_map(|&(from, to)| {
            Some(Segment {
                from,
                to,
                start: drawable(from)?,
                end: drawable(to)?,
            })
        })
        .collect();

    Skeleton {
        joints,
        segments,
        joint_color: JOINT_COLOR,
        segment_color: SEGMENT_COLOR,
        thickness: STROKE_THICKNESS,
        radius: JOINT_RADIUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmark;

    #[test]
    fn test_tips_stack_from_top() {
        let out = captions(
            &[Tip::StandingLegStraight, Tip::HandsAboveHead],
            PoseSelection::Tree,
            480.0,
        );

        assert_eq!(out.len(), 4);
        assert_eq!(out[0].position, Coord::new(10.0, 30.0));
        assert_eq!(out[1].position, Coord::new(10.0, 60.0));
        assert_eq!(out[1].text, "Raise your hands above your head");
    }

    #[test]
    fn test_status_and_help_on_bottom_lines() {
        let out = captions(&[], PoseSelection::None, 480.0);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].kind, CaptionKind::Status);
        assert_eq!(out[0].text, "Current Pose: None");
        assert_eq!(out[0].position, Coord::new(10.0, 420.0));
        assert_eq!(out[1].kind, CaptionKind::Help);
        assert_eq!(out[1].position, Coord::new(10.0, 450.0));
    }

    #[test]
    fn test_skeleton_in_pixel_space() {
        let set = LandmarkSet::new()
            .with(BodyLandmark::LeftShoulder, Landmark::new(0.25, 0.5))
            .with(BodyLandmark::RightShoulder, Landmark::new(0.75, 0.5))
            .with(BodyLandmark::LeftElbow, Landmark::new(0.25, 0.75));

        let sk = skeleton(&set, 640.0, 480.0);

        assert_eq!(sk.joints.len(), 3);
        assert_eq!(sk.joints[0].landmark, BodyLandmark::LeftShoulder);
        assert_eq!(sk.joints[0].position, Coord::new(160.0, 240.0));
        assert_eq!(
            sk.segments,
            vec![
                Segment {
                    from: BodyLandmark::LeftShoulder,
                    to: BodyLandmark::RightShoulder,
                    start: Coord::new(160.0, 240.0),
                    end: Coord::new(480.0, 240.0),
                },
                Segment {
                    from: BodyLandmark::LeftShoulder,
                    to: BodyLandmark::LeftElbow,
                    start: Coord::new(160.0, 240.0),
                    end: Coord::new(160.0, 360.0),
                },
            ]
        );
        assert_eq!(sk.joint_color, Bgr(245, 117, 66));
        assert_eq!(sk.segment_color, Bgr(245, 66, 230));
    }

    #[test]
    fn test_skeleton_drops_unreliable_joints() {
        let set = LandmarkSet::new()
            .with(BodyLandmark::LeftHip, Landmark::new(0.4, 0.5).with_visibility(0.9))
            .with(BodyLandmark::RightHip, Landmark::new(0.6, 0.5).with_visibility(0.2))
            .with(BodyLandmark::LeftKnee, Landmark::new(f64::NAN, 0.7));

        let sk = skeleton(&set, 100.0, 100.0);

        assert_eq!(sk.joints.len(), 1);
        assert_eq!(sk.joints[0].landmark, BodyLandmark::LeftHip);
        assert!(sk.segments.is_empty());
    }
}
