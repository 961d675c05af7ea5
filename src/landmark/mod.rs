//! Landmark model for yogaform.
//!
//! This module defines what the external pose-estimation model hands us:
//! named body joints in normalized image space, grouped per frame.
//!
//! # Design Principles
//!
//! 1. **Type Safety**: coordinates carry a space marker so normalized
//!    landmark positions and pixel overlay positions can't be mixed.
//!
//! 2. **Explicit absence**: a frame with no detected person is
//!    `Frame { landmarks: None }`, and individual joints may be missing
//!    from a [`LandmarkSet`]. Nothing downstream assumes a full skeleton.
//!
//! 3. **Permissive Construction**: non-finite or off-frame coordinates can
//!    be represented, so validation can report them instead of the readers
//!    rejecting whole recordings.
//!
//! # Example
//!
//! ```
//! use yogaform::landmark::{BodyLandmark, Frame, Landmark, LandmarkSet, Recording};
//!
//! let recording = Recording::new(vec![
//!     Frame::detected(
//!         LandmarkSet::new()
//!             .with(BodyLandmark::RightShoulder, Landmark::new(0.45, 0.30))
//!             .with(BodyLandmark::RightHip, Landmark::new(0.45, 0.55)),
//!     ),
//!     Frame::empty(),
//! ]);
//! assert_eq!(recording.detected_count(), 1);
//! ```

mod body;
mod coord;
pub mod io_csv;
pub mod io_json;
mod model;
mod space;

pub use body::BodyLandmark;
pub use coord::Coord;
pub use model::{Frame, Landmark, LandmarkSet, Recording};
pub use space::{Normalized, Pixel};
