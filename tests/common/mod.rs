#![allow(dead_code)]

use std::path::PathBuf;

use yogaform::landmark::{BodyLandmark, Landmark, LandmarkSet};

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A Warrior II held with the right knee bent to 90 degrees, left leg
/// straight, and both arms level with the shoulders.
pub fn warrior2_detection() -> LandmarkSet {
    [
        (BodyLandmark::RightShoulder, 0.45, 0.30),
        (BodyLandmark::RightHip, 0.45, 0.55),
        (BodyLandmark::RightKnee, 0.30, 0.55),
        (BodyLandmark::RightAnkle, 0.30, 0.80),
        (BodyLandmark::RightWrist, 0.20, 0.30),
        (BodyLandmark::LeftShoulder, 0.55, 0.30),
        (BodyLandmark::LeftHip, 0.55, 0.55),
        (BodyLandmark::LeftKnee, 0.65, 0.65),
        (BodyLandmark::LeftAnkle, 0.75, 0.75),
        (BodyLandmark::LeftWrist, 0.80, 0.30),
    ]
    .into_iter()
    .map(|(joint, x, y)| (joint, Landmark::new(x, y).with_visibility(0.95)))
    .collect()
}
