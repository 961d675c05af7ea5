//! Triangle pose rules.

use super::points::PosePoints;
use super::thresholds::TriangleThresholds;
use super::tip::Tip;
use crate::geometry::{angle, deviation};
use crate::landmark::Coord;

pub fn evaluate(points: &PosePoints, t: &TriangleThresholds) -> Vec<Tip> {
    let mut tips = Vec::new();
    let PosePoints { left, right } = points;

    if (right.ankle.x - left.ankle.x).abs() < t.stance_min_width {
        tips.push(Tip::WidenStance);
    }

    if right.knee_angle() < t.straight_leg_min || left.knee_angle() < t.straight_leg_min {
        tips.push(Tip::StraightenLegs);
    }

    // Spine runs from the hip centre to the shoulder centre; the reference
    // ray points horizontally right from the right hip's height.
    let shoulder_centre = Coord::new((right.shoulder.x + left.shoulder.x) / 2.0, right.shoulder.y);
    let hip_centre = Coord::new((right.hip.x + left.hip.x) / 2.0, right.hip.y);
    let reference = right.hip.offset(t.spine_reference_offset, 0.0);
    let spine = angle(shoulder_centre, hip_centre, reference);
    if deviation(spine, t.spine_target) > t.spine_tolerance {
        tips.push(Tip::TiltTorso);
    }

    if (right.wrist.x - left.wrist.x).abs() > t.wrist_alignment_max {
        tips.push(Tip::AlignArms);
    }

    tips
}
