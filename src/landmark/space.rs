//! Coordinate space marker types.
//!
//! Zero-sized types used as type parameters so that normalized landmark
//! positions and pixel positions on the video surface cannot be mixed.

use std::fmt;

/// Marker type for pixel coordinates on a rendered frame.
///
/// (0, 0) is the top-left corner of the frame.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Marker type for normalized coordinates (fractions of frame width/height).
///
/// This is the space pose-estimation models report landmarks in. Values are
/// nominally in [0, 1] but detectors may place occluded joints slightly
/// outside the frame.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
