//! Tree pose rules.

use super::points::PosePoints;
use super::thresholds::TreeThresholds;
use super::tip::Tip;
use crate::geometry::{angle, deviation};
use crate::landmark::Coord;

pub fn evaluate(points: &PosePoints, t: &TreeThresholds) -> Vec<Tip> {
    let mut tips = Vec::new();
    let PosePoints { left, right } = points;

    // The straighter leg is the one being stood on.
    let right_leg = right.knee_angle();
    let left_leg = left.knee_angle();
    let (standing_leg, raised_foot, standing_knee) = if right_leg > left_leg {
        (right_leg, left.ankle, right.knee)
    } else {
        (left_leg, right.ankle, left.knee)
    };

    if standing_leg < t.standing_leg_min {
        tips.push(Tip::StandingLegStraight);
    }

    // Vertex sits between the hips horizontally but at the right hip's
    // height, so a raised or dropped left hip bends the angle away from 180.
    let vertex = Coord::new((right.hip.x + left.hip.x) / 2.0, right.hip.y);
    let hip_line = angle(right.hip, vertex, left.hip);
    if deviation(hip_line, t.hip_level_target) > t.hip_level_tolerance {
        tips.push(Tip::HipsLevel);
    }

    if (raised_foot.y - standing_knee.y).abs() > t.foot_knee_max_offset {
        tips.push(Tip::FootHigher);
    }

    let right_raised = right.wrist.y < right.shoulder.y;
    let left_raised = left.wrist.y < left.shoulder.y;
    if !(right_raised && left_raised) {
        tips.push(Tip::HandsAboveHead);
    }

    tips
}
