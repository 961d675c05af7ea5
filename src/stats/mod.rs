//! Session statistics over analyzed frames.
//!
//! Summarizes how often the user held good form and which corrections came
//! up most, for the end-of-run report.

use serde::Serialize;
use std::fmt;

use crate::pose::{PoseSelection, Tip};
use crate::session::FrameOutcome;

/// Summary of a replayed session.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SessionStats {
    /// The pose frames were checked against.
    pub pose: String,
    /// Total frames seen.
    pub frames: usize,
    /// Frames the rules ran on.
    pub analyzed: usize,
    /// Frames with nobody in view.
    pub no_person: usize,
    /// Frames the rules couldn't run on.
    pub skipped: usize,
    /// Analyzed frames with no tips.
    pub correct: usize,
    /// How often each tip fired, in rule order. Tips that never fired are
    /// left out.
    pub tips: Vec<TipCount>,
}

/// A tip and the number of frames it appeared in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TipCount {
    pub tip: Tip,
    pub message: &'static str,
    pub count: usize,
}

impl SessionStats {
    /// Share of analyzed frames in good form, in [0, 1]. Zero when nothing
    /// was analyzed.
    pub fn correct_ratio(&self) -> f64 {
        if self.analyzed == 0 {
            0.0
        } else {
            self.correct as f64 / self.analyzed as f64
        }
    }
}

/// Tallies frame outcomes.
pub fn summarize(selection: PoseSelection, outcomes: &[FrameOutcome]) -> SessionStats {
    let mut stats = SessionStats {
        pose: selection.label().to_string(),
        frames: outcomes.len(),
        ..Default::default()
    };
    let mut counts = [0usize; Tip::ALL.len()];

    for outcome in outcomes {
        match outcome {
            FrameOutcome::Analyzed { tips } => {
                stats.analyzed += 1;
                if tips.is_empty() {
                    stats.correct += 1;
                }
                for tip in tips {
                    counts[*tip as usize] += 1;
                }
            }
            FrameOutcome::NoPerson => stats.no_person += 1,
            FrameOutcome::Skipped { .. } => stats.skipped += 1,
        }
    }

    stats.tips = Tip::ALL
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(tip, count)| TipCount {
            tip: *tip,
            message: tip.message(),
            count,
        })
        .collect();

    stats
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Session summary ({})", self.pose)?;
        writeln!(f, "  frames:    {}", self.frames)?;
        writeln!(f, "  analyzed:  {}", self.analyzed)?;
        writeln!(f, "  no person: {}", self.no_person)?;
        writeln!(f, "  skipped:   {}", self.skipped)?;
        writeln!(
            f,
            "  correct:   {} ({:.1}%)",
            self.correct,
            self.correct_ratio() * 100.0
        )?;

        if !self.tips.is_empty() {
            writeln!(f)?;
            writeln!(f, "  Corrections:")?;
            for entry in &self.tips {
                writeln!(f, "    {:>5}  {}", entry.count, entry.message)?;
            }
        }

        Ok(())
    }
}
