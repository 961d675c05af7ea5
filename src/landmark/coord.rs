//! Typed 2D points using PhantomData for compile-time space safety.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::space::{Normalized, Pixel};

/// A 2D point with a type-level marker for its coordinate space.
///
/// `TSpace` is either [`Normalized`] (landmark space) or [`Pixel`]
/// (overlay space). The y axis grows downward in both.
#[derive(Clone, Copy, PartialEq)]
pub struct Coord<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Coord<TSpace> {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns a copy shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Coord<Normalized> {
    /// Returns true if the point lies inside the unit frame (inclusive).
    #[inline]
    pub fn is_in_frame(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Scales a normalized point onto a frame of the given pixel size.
    pub fn to_pixel(&self, frame_width: f64, frame_height: f64) -> Coord<Pixel> {
        Coord::new(self.x * frame_width, self.y * frame_height)
    }
}

impl Coord<Pixel> {
    /// Maps a pixel position back into normalized space.
    pub fn to_normalized(&self, frame_width: f64, frame_height: f64) -> Coord<Normalized> {
        Coord::new(self.x / frame_width, self.y / frame_height)
    }
}

impl<TSpace> std::fmt::Debug for Coord<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Coord").field(&self.x).field(&self.y).finish()
    }
}

// Hand-written so the uninhabited space markers need no serde impls.
impl<TSpace> Serialize for Coord<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Coord", 2)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Coord<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct CoordData {
            x: f64,
            y: f64,
        }
        let data = CoordData::deserialize(deserializer)?;
        Ok(Coord::new(data.x, data.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_is_finite() {
        let finite: Coord<Normalized> = Coord::new(0.4, 0.6);
        assert!(finite.is_finite());

        let nan: Coord<Normalized> = Coord::new(f64::NAN, 0.6);
        assert!(!nan.is_finite());

        let inf: Coord<Normalized> = Coord::new(0.4, f64::INFINITY);
        assert!(!inf.is_finite());
    }

    #[test]
    fn test_in_frame_is_inclusive() {
        assert!(Coord::<Normalized>::new(0.0, 1.0).is_in_frame());
        assert!(!Coord::<Normalized>::new(-0.01, 0.5).is_in_frame());
        assert!(!Coord::<Normalized>::new(0.5, 1.2).is_in_frame());
    }

    #[test]
    fn test_pixel_conversion() {
        let p: Coord<Normalized> = Coord::new(0.25, 0.5);
        let px = p.to_pixel(640.0, 480.0);
        assert_eq!(px.x, 160.0);
        assert_eq!(px.y, 240.0);

        let back = px.to_normalized(640.0, 480.0);
        assert_eq!(back, p);
    }
}
