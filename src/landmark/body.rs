//! The 33-point body landmark topology used by MediaPipe-style pose models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named body joint, with the model's landmark index as discriminant.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl BodyLandmark {
    /// Every landmark, in model index order.
    pub const ALL: [BodyLandmark; 33] = [
        BodyLandmark::Nose,
        BodyLandmark::LeftEyeInner,
        BodyLandmark::LeftEye,
        BodyLandmark::LeftEyeOuter,
        BodyLandmark::RightEyeInner,
        BodyLandmark::RightEye,
        BodyLandmark::RightEyeOuter,
        BodyLandmark::LeftEar,
        BodyLandmark::RightEar,
        BodyLandmark::MouthLeft,
        BodyLandmark::MouthRight,
        BodyLandmark::LeftShoulder,
        BodyLandmark::RightShoulder,
        BodyLandmark::LeftElbow,
        BodyLandmark::RightElbow,
        BodyLandmark::LeftWrist,
        BodyLandmark::RightWrist,
        BodyLandmark::LeftPinky,
        BodyLandmark::RightPinky,
        BodyLandmark::LeftIndex,
        BodyLandmark::RightIndex,
        BodyLandmark::LeftThumb,
        BodyLandmark::RightThumb,
        BodyLandmark::LeftHip,
        BodyLandmark::RightHip,
        BodyLandmark::LeftKnee,
        BodyLandmark::RightKnee,
        BodyLandmark::LeftAnkle,
        BodyLandmark::RightAnkle,
        BodyLandmark::LeftHeel,
        BodyLandmark::RightHeel,
        BodyLandmark::LeftFootIndex,
        BodyLandmark::RightFootIndex,
    ];

    /// Bone segments drawn between landmarks, as the pose model defines them.
    pub const CONNECTIONS: [(BodyLandmark, BodyLandmark); 35] = [
        (BodyLandmark::Nose, BodyLandmark::LeftEyeInner),
        (BodyLandmark::LeftEyeInner, BodyLandmark::LeftEye),
        (BodyLandmark::LeftEye, BodyLandmark::LeftEyeOuter),
        (BodyLandmark::LeftEyeOuter, BodyLandmark::LeftEar),
        (BodyLandmark::Nose, BodyLandmark::RightEyeInner),
        (BodyLandmark::RightEyeInner, BodyLandmark::RightEye),
        (BodyLandmark::RightEye, BodyLandmark::RightEyeOuter),
        (BodyLandmark::RightEyeOuter, BodyLandmark::RightEar),
        (BodyLandmark::MouthLeft, BodyLandmark::MouthRight),
        (BodyLandmark::LeftShoulder, BodyLandmark::RightShoulder),
        (BodyLandmark::LeftShoulder, BodyLandmark::LeftElbow),
        (BodyLandmark::LeftElbow, BodyLandmark::LeftWrist),
        (BodyLandmark::LeftWrist, BodyLandmark::LeftPinky),
        (BodyLandmark::LeftWrist, BodyLandmark::LeftIndex),
        (BodyLandmark::LeftWrist, BodyLandmark::LeftThumb),
        (BodyLandmark::LeftPinky, BodyLandmark::LeftIndex),
        (BodyLandmark::RightShoulder, BodyLandmark::RightElbow),
        (BodyLandmark::RightElbow, BodyLandmark::RightWrist),
        (BodyLandmark::RightWrist, BodyLandmark::RightPinky),
        (BodyLandmark::RightWrist, BodyLandmark::RightIndex),
        (BodyLandmark::RightWrist, BodyLandmark::RightThumb),
        (BodyLandmark::RightPinky, BodyLandmark::RightIndex),
        (BodyLandmark::LeftShoulder, BodyLandmark::LeftHip),
        (BodyLandmark::RightShoulder, BodyLandmark::RightHip),
        (BodyLandmark::LeftHip, BodyLandmark::RightHip),
        (BodyLandmark::LeftHip, BodyLandmark::LeftKnee),
        (BodyLandmark::RightHip, BodyLandmark::RightKnee),
        (BodyLandmark::LeftKnee, BodyLandmark::LeftAnkle),
        (BodyLandmark::RightKnee, BodyLandmark::RightAnkle),
        (BodyLandmark::LeftAnkle, BodyLandmark::LeftHeel),
        (BodyLandmark::RightAnkle, BodyLandmark::RightHeel),
        (BodyLandmark::LeftHeel, BodyLandmark::LeftFootIndex),
        (BodyLandmark::RightHeel, BodyLandmark::RightFootIndex),
        (BodyLandmark::LeftAnkle, BodyLandmark::LeftFootIndex),
        (BodyLandmark::RightAnkle, BodyLandmark::RightFootIndex),
    ];

    /// Returns the model's landmark index (0..=32).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks a landmark up by its model index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the snake_case name used in recordings.
    pub fn name(self) -> &'static str {
        match self {
            BodyLandmark::Nose => "nose",
            BodyLandmark::LeftEyeInner => "left_eye_inner",
            BodyLandmark::LeftEye => "left_eye",
            BodyLandmark::LeftEyeOuter => "left_eye_outer",
            BodyLandmark::RightEyeInner => "right_eye_inner",
            BodyLandmark::RightEye => "right_eye",
            BodyLandmark::RightEyeOuter => "right_eye_outer",
            BodyLandmark::LeftEar => "left_ear",
            BodyLandmark::RightEar => "right_ear",
            BodyLandmark::MouthLeft => "mouth_left",
            BodyLandmark::MouthRight => "mouth_right",
            BodyLandmark::LeftShoulder => "left_shoulder",
            BodyLandmark::RightShoulder => "right_shoulder",
            BodyLandmark::LeftElbow => "left_elbow",
            BodyLandmark::RightElbow => "right_elbow",
            BodyLandmark::LeftWrist => "left_wrist",
            BodyLandmark::RightWrist => "right_wrist",
            BodyLandmark::LeftPinky => "left_pinky",
            BodyLandmark::RightPinky => "right_pinky",
            BodyLandmark::LeftIndex => "left_index",
            BodyLandmark::RightIndex => "right_index",
            BodyLandmark::LeftThumb => "left_thumb",
            BodyLandmark::RightThumb => "right_thumb",
            BodyLandmark::LeftHip => "left_hip",
            BodyLandmark::RightHip => "right_hip",
            BodyLandmark::LeftKnee => "left_knee",
            BodyLandmark::RightKnee => "right_knee",
            BodyLandmark::LeftAnkle => "left_ankle",
            BodyLandmark::RightAnkle => "right_ankle",
            BodyLandmark::LeftHeel => "left_heel",
            BodyLandmark::RightHeel => "right_heel",
            BodyLandmark::LeftFootIndex => "left_foot_index",
            BodyLandmark::RightFootIndex => "right_foot_index",
        }
    }
}

impl fmt::Display for BodyLandmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BodyLandmark {
    type Err = String;

    /// Accepts snake_case names, case-insensitively (so `RIGHT_SHOULDER` works).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lm| lm.name() == wanted)
            .ok_or_else(|| format!("unknown landmark '{}'", s))
    }
}
