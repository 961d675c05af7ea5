#![allow(dead_code)]

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

use yogaform::landmark::{BodyLandmark, Coord, Frame, Landmark, LandmarkSet, Normalized, Recording};
use yogaform::pose::{PosePoints, Side};

pub const EPS_JSON: f64 = 1e-12;
pub const EPS_CSV: f64 = 1e-12;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// A point somewhat outside the unit square, as detectors report for
/// joints near the frame edge.
pub fn arb_coord() -> BoxedStrategy<Coord<Normalized>> {
    (-0.5f64..1.5, -0.5f64..1.5)
        .prop_map(|(x, y)| Coord::new(x, y))
        .boxed()
}

pub fn arb_landmark() -> BoxedStrategy<Landmark> {
    (
        -0.5f64..1.5,
        -0.5f64..1.5,
        proptest::option::of(-1.0f64..1.0),
        proptest::option::of(0.0f64..=1.0),
    )
        .prop_map(|(x, y, z, visibility)| Landmark { x, y, z, visibility })
        .boxed()
}

pub fn arb_body_landmark() -> BoxedStrategy<BodyLandmark> {
    proptest::sample::select(BodyLandmark::ALL.to_vec()).boxed()
}

/// A non-empty set of joints.
pub fn arb_landmark_set(max_joints: usize) -> BoxedStrategy<LandmarkSet> {
    assert!(max_joints > 0, "max_joints must be > 0");

    proptest::collection::btree_map(arb_body_landmark(), arb_landmark(), 1..=max_joints)
        .prop_map(|map| map.into_iter().collect())
        .boxed()
}

/// A recording where roughly one frame in five has nobody in view.
pub fn arb_recording(max_frames: usize) -> BoxedStrategy<Recording> {
    let frame = prop_oneof![
        1 => Just(Frame::empty()),
        4 => arb_landmark_set(BodyLandmark::ALL.len()).prop_map(Frame::detected),
    ];

    proptest::collection::vec(frame, 0..=max_frames)
        .prop_map(Recording::new)
        .boxed()
}

pub fn arb_side() -> BoxedStrategy<Side> {
    (arb_coord(), arb_coord(), arb_coord(), arb_coord(), arb_coord())
        .prop_map(|(shoulder, hip, knee, ankle, wrist)| Side {
            shoulder,
            hip,
            knee,
            ankle,
            wrist,
        })
        .boxed()
}

pub fn arb_pose_points() -> BoxedStrategy<PosePoints> {
    (arb_side(), arb_side())
        .prop_map(|(left, right)| PosePoints { left, right })
        .boxed()
}

/// A detection carrying every joint the pose rules read.
pub fn arb_full_detection() -> BoxedStrategy<LandmarkSet> {
    proptest::collection::vec(arb_landmark(), PosePoints::REQUIRED.len())
        .prop_map(|landmarks| PosePoints::REQUIRED.into_iter().zip(landmarks).collect())
        .boxed()
}

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

fn close_opt(a: Option<f64>, b: Option<f64>, eps: f64) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => close(a, b, eps),
        (None, None) => true,
        _ => false,
    }
}

pub fn assert_recordings_equivalent(a: &Recording, b: &Recording, eps: f64) -> Result<(), String> {
    if a.frames.len() != b.frames.len() {
        return Err(format!(
            "frame count mismatch: left={} right={}",
            a.frames.len(),
            b.frames.len()
        ));
    }

    for (index, (left, right)) in a.frames.iter().zip(&b.frames).enumerate() {
        match (&left.landmarks, &right.landmarks) {
            (None, None) => {}
            (Some(left), Some(right)) => assert_sets_equivalent(index, left, right, eps)?,
            _ => {
                return Err(format!(
                    "frame {}: detection mismatch: left={} right={}",
                    index,
                    left.is_detected(),
                    right.is_detected()
                ))
            }
        }
    }

    Ok(())
}

fn assert_sets_equivalent(
    frame: usize,
    left: &LandmarkSet,
    right: &LandmarkSet,
    eps: f64,
) -> Result<(), String> {
    if left.len() != right.len() {
        return Err(format!(
            "frame {}: joint count mismatch: left={} right={}",
            frame,
            left.len(),
            right.len()
        ));
    }

    for (joint, l) in left.iter() {
        let r = right
            .get(joint)
            .ok_or_else(|| format!("frame {}: {} missing on the right", frame, joint))?;
        let same = close(l.x, r.x, eps)
            && close(l.y, r.y, eps)
            && close_opt(l.z, r.z, eps)
            && close_opt(l.visibility, r.visibility, eps);
        if !same {
            return Err(format!(
                "frame {}: {} differs: left={:?} right={:?}",
                frame, joint, l, r
            ));
        }
    }

    Ok(())
}
