//! Yogaform: rule-based posture feedback for yoga poses.
//!
//! Yogaform takes body landmarks from a pose-estimation model, one set per
//! video frame, and checks them against simple geometric rules for the
//! selected pose (Warrior II, Tree, or Triangle). Each failed rule becomes a
//! short correction such as "Straighten back leg more".
//!
//! # Modules
//!
//! - [`landmark`]: Landmark types and recording readers/writers
//! - [`geometry`]: Joint angle calculation
//! - [`pose`]: Pose rules, thresholds, and dispatch
//! - [`session`]: Pose selection and per-frame feedback payloads
//! - [`validation`]: Precondition checks over recordings
//! - [`stats`]: Session summaries
//! - [`overlay`]: Caption and skeleton placement for the video view
//! - [`error`]: Error types for yogaform operations

pub mod error;
pub mod geometry;
pub mod landmark;
pub mod overlay;
pub mod pose;
pub mod session;
pub mod stats;
pub mod validation;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

pub use error::YogaformError;

use landmark::{BodyLandmark, Recording};
use overlay::{Caption, Skeleton};
use pose::{PoseSelection, Thresholds, Tip, YogaPose};
use session::{FeedbackResponse, FrameOutcome, Session};
use stats::SessionStats;

/// The yogaform CLI application.
#[derive(Parser)]
#[command(name = "yogaform")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Replay a landmark recording and report posture feedback per frame.
    Analyze(AnalyzeArgs),
    /// Check a landmark recording for missing or suspicious joints.
    Validate(ValidateArgs),
    /// List the supported poses and the corrections each can give.
    Poses,
}

/// Arguments for the analyze subcommand.
#[derive(clap::Args)]
struct AnalyzeArgs {
    /// Landmark recording to analyze.
    input: PathBuf,

    /// Pose to check against ('warrior2', 'tree', 'triangle', or 'none').
    #[arg(long, default_value = "none")]
    pose: String,

    /// Input format ('json', 'csv', or 'auto' to go by file extension).
    #[arg(long, default_value = "auto")]
    format: String,

    /// YAML or JSON file overriding rule thresholds.
    #[arg(long)]
    thresholds: Option<PathBuf>,

    /// Output format ('text', 'json', or 'overlay').
    #[arg(long, default_value = "text")]
    output: String,

    /// Frame width in pixels, used to place the overlay skeleton.
    #[arg(long, default_value_t = 640.0)]
    frame_width: f64,

    /// Frame height in pixels, used to place overlay captions and skeleton.
    #[arg(long, default_value_t = 480.0)]
    frame_height: f64,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Landmark recording to validate.
    input: PathBuf,

    /// Pose the recording will be analyzed against; decides which joints
    /// are required.
    #[arg(long, default_value = "none")]
    pose: String,

    /// Input format ('json', 'csv', or 'auto' to go by file extension).
    #[arg(long, default_value = "auto")]
    format: String,

    /// Minimum detector visibility before a joint is flagged.
    #[arg(long, default_value_t = validation::DEFAULT_MIN_VISIBILITY)]
    min_visibility: f64,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the yogaform CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), YogaformError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze(args)) => run_analyze(args),
        Some(Commands::Validate(args)) => run_validate(args),
        Some(Commands::Poses) => run_poses(),
        None => {
            println!("yogaform {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Rule-based posture feedback for yoga poses.");
            println!();
            println!("Run 'yogaform --help' for usage information.");
            Ok(())
        }
    }
}

/// Loads a recording in the requested format.
fn read_recording(path: &Path, format: &str) -> Result<Recording, YogaformError> {
    let format = match format {
        "auto" => {
            let is_csv = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if is_csv {
                "csv"
            } else {
                "json"
            }
        }
        other => other,
    };

    match format {
        "json" => landmark::io_json::read_recording_json(path),
        "csv" => landmark::io_csv::read_recording_csv(path),
        other => Err(YogaformError::UnsupportedFormat(format!(
            "'{}' (supported: json, csv, auto)",
            other
        ))),
    }
}

/// Per-frame entry in JSON analyze output.
#[derive(Serialize)]
struct FrameRecord {
    frame: usize,
    status: FrameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<BodyLandmark>,
    #[serde(flatten)]
    response: Option<FeedbackResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum FrameStatus {
    Analyzed,
    NoPerson,
    Skipped,
}

#[derive(Serialize)]
struct AnalyzeOutput {
    frames: Vec<FrameRecord>,
    summary: SessionStats,
}

#[derive(Serialize)]
struct OverlayFrame {
    frame: usize,
    captions: Vec<Caption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    skeleton: Option<Skeleton>,
}

/// Execute the analyze subcommand.
fn run_analyze(args: AnalyzeArgs) -> Result<(), YogaformError> {
    if !matches!(args.output.as_str(), "text" | "json" | "overlay") {
        return Err(YogaformError::UnsupportedFormat(format!(
            "output '{}' (supported: text, json, overlay)",
            args.output
        )));
    }

    let thresholds = match &args.thresholds {
        Some(path) => Thresholds::load(path)?,
        None => Thresholds::default(),
    };
    let mut session = Session::with_thresholds(thresholds);
    session.select_by_key(&args.pose)?;

    let recording = read_recording(&args.input, &args.format)?;
    info!(
        "analyzing {} frame(s) from {} as {}",
        recording.frames.len(),
        args.input.display(),
        session.current_pose_label()
    );

    let outcomes: Vec<FrameOutcome> = recording
        .frames
        .iter()
        .enumerate()
        .map(|(index, frame)| session.evaluate_frame(index, frame))
        .collect();
    let selection = session.selection();

    match args.output.as_str() {
        "json" => {
            let frames = outcomes
                .iter()
                .enumerate()
                .map(|(frame, outcome)| frame_record(frame, outcome, selection))
                .collect();
            let output = AnalyzeOutput {
                frames,
                summary: stats::summarize(selection, &outcomes),
            };
            print_json(&output)?;
        }
        "overlay" => {
            let frames: Vec<OverlayFrame> = outcomes
                .iter()
                .zip(&recording.frames)
                .enumerate()
                .map(|(frame, (outcome, recorded))| {
                    let tips: &[Tip] = match outcome {
                        FrameOutcome::Analyzed { tips } => tips,
                        _ => &[],
                    };
                    OverlayFrame {
                        frame,
                        captions: overlay::captions(tips, selection, args.frame_height),
                        skeleton: recorded.landmarks.as_ref().map(|landmarks| {
                            overlay::skeleton(landmarks, args.frame_width, args.frame_height)
                        }),
                    }
                })
                .collect();
            print_json(&frames)?;
        }
        _ => {
            for (frame, outcome) in outcomes.iter().enumerate() {
                print_frame_line(frame, outcome);
            }
            println!();
            print!("{}", stats::summarize(selection, &outcomes));
        }
    }

    Ok(())
}

fn frame_record(frame: usize, outcome: &FrameOutcome, selection: PoseSelection) -> FrameRecord {
    match outcome {
        FrameOutcome::Analyzed { tips } => FrameRecord {
            frame,
            status: FrameStatus::Analyzed,
            missing: None,
            response: Some(FeedbackResponse::new(tips, selection)),
        },
        FrameOutcome::NoPerson => FrameRecord {
            frame,
            status: FrameStatus::NoPerson,
            missing: None,
            response: None,
        },
        FrameOutcome::Skipped { missing } => FrameRecord {
            frame,
            status: FrameStatus::Skipped,
            missing: *missing,
            response: None,
        },
    }
}

fn print_frame_line(frame: usize, outcome: &FrameOutcome) {
    match outcome {
        FrameOutcome::Analyzed { tips } if tips.is_empty() => {
            println!("frame {}: good form", frame);
        }
        FrameOutcome::Analyzed { tips } => {
            println!("frame {}: {} correction(s)", frame, tips.len());
            for tip in tips {
                println!("    - {}", tip);
            }
        }
        FrameOutcome::NoPerson => println!("frame {}: no person detected", frame),
        FrameOutcome::Skipped { missing: Some(landmark) } => {
            println!("frame {}: skipped (missing {})", frame, landmark);
        }
        FrameOutcome::Skipped { missing: None } => println!("frame {}: skipped", frame),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), YogaformError> {
    let json = serde_json::to_string_pretty(value).map_err(YogaformError::OutputJson)?;
    println!("{}", json);
    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), YogaformError> {
    if !matches!(args.output.as_str(), "text" | "json") {
        return Err(YogaformError::UnsupportedFormat(format!(
            "output '{}' (supported: text, json)",
            args.output
        )));
    }

    let selection: PoseSelection = args.pose.parse()?;
    let recording = read_recording(&args.input, &args.format)?;

    let opts = validation::ValidateOptions {
        selection,
        min_visibility: args.min_visibility,
        strict: args.strict,
    };
    let report = validation::validate_recording(&recording, &opts);

    match args.output.as_str() {
        "json" => {
            #[derive(Serialize)]
            struct JsonReport<'a> {
                error_count: usize,
                warning_count: usize,
                issues: &'a [validation::ValidationIssue],
            }
            print_json(&JsonReport {
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                issues: &report.issues,
            })?;
        }
        _ => {
            print!("{}", report);
        }
    }

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (opts.strict && has_warnings) {
        Err(YogaformError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}

/// Execute the poses subcommand.
fn run_poses() -> Result<(), YogaformError> {
    for pose in YogaPose::ALL {
        println!("{:<9} [{}]  {}", pose.key(), pose.hotkey(), pose.label());
        for tip in pose.tips() {
            println!("    - {}", tip);
        }
    }
    Ok(())
}
