//! Rule thresholds for each pose.
//!
//! The constants are empirical: they were tuned by eye against webcam
//! footage, not derived from anatomical literature. [`Thresholds`] bundles
//! them so they can be overridden from a YAML or JSON file.
//!
//! Angles are in degrees; distances are in normalized frame units.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::YogaformError;

// Warrior II
pub const WARRIOR2_FRONT_KNEE_MIN: f64 = 75.0;
pub const WARRIOR2_FRONT_KNEE_MAX: f64 = 105.0;
pub const WARRIOR2_BACK_KNEE_MIN: f64 = 140.0;
pub const WARRIOR2_HIP_SQUARE_TARGET: f64 = 90.0;
pub const WARRIOR2_HIP_SQUARE_TOLERANCE: f64 = 25.0;
pub const WARRIOR2_ARM_LEVEL_TOLERANCE: f64 = 0.10;

// Tree
pub const TREE_STANDING_LEG_MIN: f64 = 160.0;
pub const TREE_HIP_LEVEL_TARGET: f64 = 180.0;
pub const TREE_HIP_LEVEL_TOLERANCE: f64 = 25.0;
pub const TREE_FOOT_KNEE_MAX_OFFSET: f64 = 0.15;

// Triangle
pub const TRIANGLE_STANCE_MIN_WIDTH: f64 = 0.30;
pub const TRIANGLE_STRAIGHT_LEG_MIN: f64 = 160.0;
/// Horizontal offset from the right hip to the spine-tilt reference point.
pub const TRIANGLE_SPINE_REFERENCE_OFFSET: f64 = 0.1;
pub const TRIANGLE_SPINE_TARGET: f64 = 90.0;
pub const TRIANGLE_SPINE_TOLERANCE: f64 = 20.0;
pub const TRIANGLE_WRIST_ALIGNMENT_MAX: f64 = 0.15;

/// All rule thresholds, grouped by pose.
///
/// Missing fields in a thresholds file fall back to the constants above.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub warrior2: Warrior2Thresholds,
    pub tree: TreeThresholds,
    pub triangle: TriangleThresholds,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Warrior2Thresholds {
    pub front_knee_min: f64,
    pub front_knee_max: f64,
    pub back_knee_min: f64,
    pub hip_square_target: f64,
    pub hip_square_tolerance: f64,
    pub arm_level_tolerance: f64,
}

impl Default for Warrior2Thresholds {
    fn default() -> Self {
        Self {
            front_knee_min: WARRIOR2_FRONT_KNEE_MIN,
            front_knee_max: WARRIOR2_FRONT_KNEE_MAX,
            back_knee_min: WARRIOR2_BACK_KNEE_MIN,
            hip_square_target: WARRIOR2_HIP_SQUARE_TARGET,
            hip_square_tolerance: WARRIOR2_HIP_SQUARE_TOLERANCE,
            arm_level_tolerance: WARRIOR2_ARM_LEVEL_TOLERANCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeThresholds {
    pub standing_leg_min: f64,
    pub hip_level_target: f64,
    pub hip_level_tolerance: f64,
    pub foot_knee_max_offset: f64,
}

impl Default for TreeThresholds {
    fn default() -> Self {
        Self {
            standing_leg_min: TREE_STANDING_LEG_MIN,
            hip_level_target: TREE_HIP_LEVEL_TARGET,
            hip_level_tolerance: TREE_HIP_LEVEL_TOLERANCE,
            foot_knee_max_offset: TREE_FOOT_KNEE_MAX_OFFSET,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleThresholds {
    pub stance_min_width: f64,
    pub straight_leg_min: f64,
    pub spine_reference_offset: f64,
    pub spine_target: f64,
    pub spine_tolerance: f64,
    pub wrist_alignment_max: f64,
}

impl Default for TriangleThresholds {
    fn default() -> Self {
        Self {
            stance_min_width: TRIANGLE_STANCE_MIN_WIDTH,
            straight_leg_min: TRIANGLE_STRAIGHT_LEG_MIN,
            spine_reference_offset: TRIANGLE_SPINE_REFERENCE_OFFSET,
            spine_target: TRIANGLE_SPINE_TARGET,
            spine_tolerance: TRIANGLE_SPINE_TOLERANCE,
            wrist_alignment_max: TRIANGLE_WRIST_ALIGNMENT_MAX,
        }
    }
}

impl Thresholds {
    /// Loads thresholds from a file.
    ///
    /// `.yaml`/`.yml` files are parsed as YAML; anything else as JSON.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, YogaformError> {
        let content = fs::read_to_string(path).map_err(YogaformError::Io)?;
        let parse_error = |message: String| YogaformError::ThresholdsParse {
            path: path.to_path_buf(),
            message,
        };

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml_str(&content).map_err(|e| parse_error(e.to_string()))
        } else {
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))
        }
    }

    /// Parses thresholds from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
