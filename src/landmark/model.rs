//! Core landmark model: what a pose-estimation model reports per frame.
//!
//! A [`Recording`] is a sequence of [`Frame`]s; each frame either carries a
//! [`LandmarkSet`] or records that no person was detected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::body::BodyLandmark;
use super::coord::Coord;
use super::space::Normalized;

/// A single detected joint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position as a fraction of frame width.
    pub x: f64,

    /// Vertical position as a fraction of frame height (0 is the top).
    pub y: f64,

    /// Optional depth relative to the hips, in roughly the same scale as x.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,

    /// Optional detector confidence that the joint is visible, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Creates a 2D landmark with no depth or visibility.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    /// Sets the depth component.
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Sets the visibility score.
    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Returns the 2D position.
    #[inline]
    pub fn coord(&self) -> Coord<Normalized> {
        Coord::new(self.x, self.y)
    }
}

/// All landmarks detected for one person in one frame, keyed by joint.
///
/// Detectors may omit joints, so every lookup is fallible.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: BTreeMap<BodyLandmark, Landmark>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a landmark, returning the previous value.
    pub fn insert(&mut self, joint: BodyLandmark, landmark: Landmark) -> Option<Landmark> {
        self.points.insert(joint, landmark)
    }

    /// Builder-style insert.
    pub fn with(mut self, joint: BodyLandmark, landmark: Landmark) -> Self {
        self.points.insert(joint, landmark);
        self
    }

    pub fn get(&self, joint: BodyLandmark) -> Option<&Landmark> {
        self.points.get(&joint)
    }

    pub fn contains(&self, joint: BodyLandmark) -> bool {
        self.points.contains_key(&joint)
    }

    pub fn remove(&mut self, joint: BodyLandmark) -> Option<Landmark> {
        self.points.remove(&joint)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates landmarks in model index order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyLandmark, &Landmark)> {
        self.points.iter().map(|(k, v)| (*k, v))
    }

    /// Builds a set from a dense, index-ordered landmark array as emitted by
    /// the model (entry `i` is joint `i`). Extra entries are ignored.
    pub fn from_indexed(landmarks: &[Landmark]) -> Self {
        let points = landmarks
            .iter()
            .enumerate()
            .filter_map(|(i, lm)| BodyLandmark::from_index(i).map(|joint| (joint, *lm)))
            .collect();
        Self { points }
    }
}

impl FromIterator<(BodyLandmark, Landmark)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (BodyLandmark, Landmark)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// One video frame's detection result.
///
/// The frame number is not stored; it is the frame's position in its
/// [`Recording`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Landmarks for the detected person, or `None` if nobody was found.
    pub landmarks: Option<LandmarkSet>,
}

impl Frame {
    /// A frame where the detector found a person.
    pub fn detected(landmarks: LandmarkSet) -> Self {
        Self {
            landmarks: Some(landmarks),
        }
    }

    /// A frame where the detector found nobody.
    pub fn empty() -> Self {
        Self { landmarks: None }
    }

    pub fn is_detected(&self) -> bool {
        self.landmarks.is_some()
    }
}

/// An ordered sequence of frames replayed through the analyzer.
///
/// Frame numbers are positions in `frames`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub frames: Vec<Frame>,
}

impl Recording {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Number of frames that carry a detection.
    pub fn detected_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_detected()).count()
    }
}
