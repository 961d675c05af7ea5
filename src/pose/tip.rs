//! Corrective tips emitted when a posture rule fails.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::YogaPose;

/// A single piece of posture feedback.
///
/// The variant is a stable code; [`Tip::message`] is the text shown to the
/// user. Variants are declared in the order their rules are evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tip {
    // Warrior II
    /// Front knee bent outside the target range around 90 degrees.
    FrontKneeBend,
    /// Back leg not straight enough.
    BackLegStraight,
    /// Hips not square to the side.
    SquareHips,
    /// Wrists not level with shoulders.
    ArmsParallel,

    // Tree
    /// Standing leg not straight enough.
    StandingLegStraight,
    /// Hips tilted.
    HipsLevel,
    /// Raised foot too far from the standing knee.
    FootHigher,
    /// Hands not raised above the shoulders.
    HandsAboveHead,

    // Triangle
    /// Feet too close together.
    WidenStance,
    /// One or both knees bent.
    StraightenLegs,
    /// Torso not tilted far enough to the side.
    TiltTorso,
    /// Wrists not stacked vertically.
    AlignArms,
}

impl Tip {
    /// Every tip, in evaluation order.
    pub const ALL: [Tip; 12] = [
        Tip::FrontKneeBend,
        Tip::BackLegStraight,
        Tip::SquareHips,
        Tip::ArmsParallel,
        Tip::StandingLegStraight,
        Tip::HipsLevel,
        Tip::FootHigher,
        Tip::HandsAboveHead,
        Tip::WidenStance,
        Tip::StraightenLegs,
        Tip::TiltTorso,
        Tip::AlignArms,
    ];

    /// The user-facing correction text.
    pub fn message(self) -> &'static str {
        match self {
            Tip::FrontKneeBend => "Adjust front knee bend (aim for roughly 90 degrees)",
            Tip::BackLegStraight => "Straighten back leg more",
            Tip::SquareHips => "Square hips to the side",
            Tip::ArmsParallel => "Bring arms more parallel to ground",
            Tip::StandingLegStraight => "Straighten standing leg more",
            Tip::HipsLevel => "Keep hips level",
            Tip::FootHigher => "Raise foot higher on inner thigh",
            Tip::HandsAboveHead => "Raise your hands above your head",
            Tip::WidenStance => "Widen your stance",
            Tip::StraightenLegs => "Straighten both legs",
            Tip::TiltTorso => "Tilt your torso more to the side",
            Tip::AlignArms => "Align arms in a vertical line",
        }
    }

    /// The pose whose rules produce this tip.
    pub fn pose(self) -> YogaPose {
        match self {
            Tip::FrontKneeBend | Tip::BackLegStraight | Tip::SquareHips | Tip::ArmsParallel => {
                YogaPose::Warrior2
            }
            Tip::StandingLegStraight | Tip::HipsLevel | Tip::FootHigher | Tip::HandsAboveHead => {
                YogaPose::Tree
            }
            Tip::WidenStance | Tip::StraightenLegs | Tip::TiltTorso | Tip::AlignArms => {
                YogaPose::Triangle
            }
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Renders tips as the plain strings shown on screen.
pub fn messages(tips: &[Tip]) -> Vec<String> {
    tips.iter().map(|t| t.message().to_string()).collect()
}
