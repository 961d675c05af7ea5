//! Rule-based posture feedback for yoga poses.
//!
//! Each pose has a fixed list of geometric checks over joint angles and
//! relative joint positions. A failed check appends its [`Tip`]; a frame
//! with no tips is in good form. Evaluation is a pure function of the
//! landmarks, the selection, and the thresholds.
//!
//! ```
//! use yogaform::landmark::LandmarkSet;
//! use yogaform::pose::{analyze, PoseSelection};
//!
//! // With no pose selected, nothing is checked and no landmarks are needed.
//! let tips = analyze(PoseSelection::None, &LandmarkSet::new())?;
//! assert!(tips.is_empty());
//! # Ok::<(), yogaform::YogaformError>(())
//! ```

mod points;
pub mod thresholds;
mod tip;
mod tree;
mod triangle;
mod warrior2;

pub use points::{PosePoints, Side};
pub use thresholds::{Thresholds, TreeThresholds, TriangleThresholds, Warrior2Thresholds};
pub use tip::{messages, Tip};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::YogaformError;
use crate::landmark::LandmarkSet;

/// A pose with feedback rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaPose {
    Warrior2,
    Tree,
    Triangle,
}

impl YogaPose {
    pub const ALL: [YogaPose; 3] = [YogaPose::Warrior2, YogaPose::Tree, YogaPose::Triangle];

    /// The name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            YogaPose::Warrior2 => "Warrior II",
            YogaPose::Tree => "Tree Pose",
            YogaPose::Triangle => "Triangle Pose",
        }
    }

    /// The key used to select this pose (`--pose`, control requests).
    pub fn key(self) -> &'static str {
        match self {
            YogaPose::Warrior2 => "warrior2",
            YogaPose::Tree => "tree",
            YogaPose::Triangle => "triangle",
        }
    }

    /// The keyboard shortcut that selects this pose in the live view.
    pub fn hotkey(self) -> char {
        match self {
            YogaPose::Warrior2 => '1',
            YogaPose::Tree => '2',
            YogaPose::Triangle => '3',
        }
    }

    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.hotkey() == key)
    }

    /// Tips this pose can produce, in evaluation order.
    pub fn tips(self) -> impl Iterator<Item = Tip> {
        Tip::ALL.into_iter().filter(move |t| t.pose() == self)
    }

    /// Runs this pose's rules.
    pub fn evaluate(self, points: &PosePoints, thresholds: &Thresholds) -> Vec<Tip> {
        match self {
            YogaPose::Warrior2 => warrior2::evaluate(points, &thresholds.warrior2),
            YogaPose::Tree => tree::evaluate(points, &thresholds.tree),
            YogaPose::Triangle => triangle::evaluate(points, &thresholds.triangle),
        }
    }
}

impl fmt::Display for YogaPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The pose the user currently wants checked, or none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoseSelection {
    #[default]
    None,
    Warrior2,
    Tree,
    Triangle,
}

impl PoseSelection {
    pub fn pose(self) -> Option<YogaPose> {
        match self {
            PoseSelection::None => None,
            PoseSelection::Warrior2 => Some(YogaPose::Warrior2),
            PoseSelection::Tree => Some(YogaPose::Tree),
            PoseSelection::Triangle => Some(YogaPose::Triangle),
        }
    }

    /// Display name, `"None"` when nothing is selected.
    pub fn label(self) -> &'static str {
        self.pose().map_or("None", YogaPose::label)
    }
}

impl From<YogaPose> for PoseSelection {
    fn from(pose: YogaPose) -> Self {
        match pose {
            YogaPose::Warrior2 => PoseSelection::Warrior2,
            YogaPose::Tree => PoseSelection::Tree,
            YogaPose::Triangle => PoseSelection::Triangle,
        }
    }
}

impl FromStr for PoseSelection {
    type Err = YogaformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "none" {
            return Ok(PoseSelection::None);
        }
        YogaPose::ALL
            .iter()
            .find(|p| p.key() == key)
            .map(|p| PoseSelection::from(*p))
            .ok_or_else(|| YogaformError::UnknownPose(s.to_string()))
    }
}

impl fmt::Display for PoseSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checks `landmarks` against the selected pose using default thresholds.
///
/// # Errors
/// Returns [`YogaformError::MissingLandmark`] if a pose is selected and a
/// joint its rules read is absent. With [`PoseSelection::None`] this never
/// fails.
pub fn analyze(
    selection: PoseSelection,
    landmarks: &LandmarkSet,
) -> Result<Vec<Tip>, YogaformError> {
    analyze_with(selection, landmarks, &Thresholds::default())
}

/// Like [`analyze`], with explicit thresholds.
pub fn analyze_with(
    selection: PoseSelection,
    landmarks: &LandmarkSet,
    thresholds: &Thresholds,
) -> Result<Vec<Tip>, YogaformError> {
    let Some(pose) = selection.pose() else {
        return Ok(Vec::new());
    };

    let points = PosePoints::resolve(landmarks)?;
    Ok(pose.evaluate(&points, thresholds))
}
