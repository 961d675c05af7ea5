//! Warrior II rules.
//!
//! Either leg may be in front: the more bent knee is taken as the front one.

use super::points::PosePoints;
use super::thresholds::Warrior2Thresholds;
use super::tip::Tip;
use crate::geometry::{angle, deviation};

pub fn evaluate(points: &PosePoints, t: &Warrior2Thresholds) -> Vec<Tip> {
    let mut tips = Vec::new();
    let PosePoints { left, right } = points;

    let right_knee = right.knee_angle();
    let left_knee = left.knee_angle();
    let (front_knee, back_knee) = if right_knee < left_knee {
        (right_knee, left_knee)
    } else {
        (left_knee, right_knee)
    };

    if front_knee < t.front_knee_min || front_knee > t.front_knee_max {
        tips.push(Tip::FrontKneeBend);
    }

    if back_knee < t.back_knee_min {
        tips.push(Tip::BackLegStraight);
    }

    // Shoulder over hip, measured against the hip line from either end;
    // whichever side reads squarer wins.
    let right_square = angle(right.shoulder, right.hip, left.hip);
    let left_square = angle(left.shoulder, left.hip, right.hip);
    let best = deviation(right_square, t.hip_square_target)
        .min(deviation(left_square, t.hip_square_target));
    if best > t.hip_square_tolerance {
        tips.push(Tip::SquareHips);
    }

    let right_drop = (right.wrist.y - right.shoulder.y).abs();
    let left_drop = (left.wrist.y - left.shoulder.y).abs();
    if right_drop > t.arm_level_tolerance || left_drop > t.arm_level_tolerance {
        tips.push(Tip::ArmsParallel);
    }

    tips
}
