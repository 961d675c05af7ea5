//! The joints the pose rules read, resolved from a landmark set.

use crate::error::YogaformError;
use crate::geometry::angle;
use crate::landmark::{BodyLandmark, Coord, LandmarkSet, Normalized};

/// The five joints read on one side of the body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Side {
    pub shoulder: Coord<Normalized>,
    pub hip: Coord<Normalized>,
    pub knee: Coord<Normalized>,
    pub ankle: Coord<Normalized>,
    pub wrist: Coord<Normalized>,
}

impl Side {
    /// Hip–knee–ankle angle; 180 is a straight leg.
    #[inline]
    pub fn knee_angle(&self) -> f64 {
        angle(self.hip, self.knee, self.ankle)
    }
}

/// Both sides' joints, ready for rule evaluation.
///
/// Left and right are the subject's, as labelled by the pose model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosePoints {
    pub left: Side,
    pub right: Side,
}

impl PosePoints {
    /// Every landmark the rules depend on.
    pub const REQUIRED: [BodyLandmark; 10] = [
        BodyLandmark::RightShoulder,
        BodyLandmark::RightHip,
        BodyLandmark::RightKnee,
        BodyLandmark::RightAnkle,
        BodyLandmark::RightWrist,
        BodyLandmark::LeftShoulder,
        BodyLandmark::LeftHip,
        BodyLandmark::LeftKnee,
        BodyLandmark::LeftAnkle,
        BodyLandmark::LeftWrist,
    ];

    /// Picks the required joints out of a detection.
    ///
    /// # Errors
    /// Returns [`YogaformError::MissingLandmark`] naming the first absent
    /// joint, in [`PosePoints::REQUIRED`] order.
    pub fn resolve(landmarks: &LandmarkSet) -> Result<Self, YogaformError> {
        let get = |landmark: BodyLandmark| {
            landmarks
                .get(landmark)
                .map(|lm| lm.coord())
                .ok_or(YogaformError::MissingLandmark { landmark })
        };

        let right = Side {
            shoulder: get(BodyLandmark::RightShoulder)?,
            hip: get(BodyLandmark::RightHip)?,
            knee: get(BodyLandmark::RightKnee)?,
            ankle: get(BodyLandmark::RightAnkle)?,
            wrist: get(BodyLandmark::RightWrist)?,
        };
        let left = Side {
            shoulder: get(BodyLandmark::LeftShoulder)?,
            hip: get(BodyLandmark::LeftHip)?,
            knee: get(BodyLandmark::LeftKnee)?,
            ankle: get(BodyLandmark::LeftAnkle)?,
            wrist: get(BodyLandmark::LeftWrist)?,
        };

        Ok(Self { left, right })
    }

    /// Returns the first required joint missing from `landmarks`, if any.
    pub fn first_missing(landmarks: &LandmarkSet) -> Option<BodyLandmark> {
        Self::REQUIRED
            .iter()
            .copied()
            .find(|lm| !landmarks.contains(*lm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Landmark;

    fn full_set() -> LandmarkSet {
        PosePoints::REQUIRED
            .iter()
            .enumerate()
            .map(|(i, lm)| (*lm, Landmark::new(i as f64 / 10.0, 0.5)))
            .collect()
    }

    #[test]
    fn test_resolve_full_set() {
        let points = PosePoints::resolve(&full_set()).expect("resolve");
        assert_eq!(points.right.shoulder.x, 0.0);
        assert_eq!(points.left.wrist.x, 0.9);
    }

    #[test]
    fn test_resolve_reports_missing_joint() {
        let mut set = full_set();
        set.remove(BodyLandmark::LeftKnee);

        let err = PosePoints::resolve(&set).expect_err("should fail");
        assert!(matches!(
            err,
            YogaformError::MissingLandmark {
                landmark: BodyLandmark::LeftKnee
            }
        ));
        assert_eq!(PosePoints::first_missing(&set), Some(BodyLandmark::LeftKnee));
    }

    #[test]
    fn test_knee_angle_of_straight_leg() {
        let side = Side {
            shoulder: Coord::new(0.5, 0.2),
            hip: Coord::new(0.5, 0.5),
            knee: Coord::new(0.5, 0.7),
            ankle: Coord::new(0.5, 0.9),
            wrist: Coord::new(0.5, 0.4),
        };
        assert!((side.knee_angle() - 180.0).abs() < 1e-9);
    }
}
