//! Geometric primitives for radial layout.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in layout space
//! - [`AngleSpan`] - An angular wedge `[start, end]` in radians
//!
//! # Coordinate System
//!
//! Layouts are centered on the root node at `(0, 0)`. Angles are measured in
//! radians from the positive X axis; with a renderer whose Y axis points
//! downward (SVG, most screen coordinates) positive angles turn clockwise.
//!
//! ```text
//!            -Y
//!             ▲
//!             │
//!   -X ◄──── (0,0) ────► +X   angle 0
//!             │
//!             ▼
//!            +Y               angle π/2
//! ```

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in layout coordinate space.
///
/// Points use `f64` coordinates, matching the double-precision numbers that
/// JSON consumers read. Serialized as `{"x": .., "y": ..}`.
///
/// # Examples
///
/// ```
/// # use linkmap_core::geometry::Point;
/// let parent = Point::new(10.0, 20.0);
/// let offset = Point::new(5.0, -5.0);
///
/// let child = parent.add_point(offset);
/// assert_eq!(child.x(), 15.0);
/// assert_eq!(child.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates the Cartesian offset of a polar coordinate.
    ///
    /// # Arguments
    ///
    /// * `radius` - Distance from the origin
    /// * `angle` - Angle in radians from the positive X axis
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            x: radius * angle.cos(),
            y: radius * angle.sin(),
        }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// An angular wedge `[start, end]` in radians.
///
/// The radial layout hands every node the wedge it may place its children in.
/// [`AngleSpan::subdivide`] splits a wedge into equal slices, one per child.
///
/// # Examples
///
/// ```
/// # use linkmap_core::geometry::AngleSpan;
/// let full = AngleSpan::full();
/// let slices: Vec<_> = full.subdivide(4).collect();
///
/// assert_eq!(slices.len(), 4);
/// assert_eq!(slices[0].midpoint(), full.width() / 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSpan {
    start: f64,
    end: f64,
}

impl AngleSpan {
    /// Creates a wedge from `start` to `end` radians.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The full circle `[0, 2π)`.
    pub fn full() -> Self {
        Self::new(0.0, TAU)
    }

    /// Returns the start angle
    pub fn start(self) -> f64 {
        self.start
    }

    /// Returns the end angle
    pub fn end(self) -> f64 {
        self.end
    }

    /// Angular width of the wedge
    pub fn width(self) -> f64 {
        self.end - self.start
    }

    /// Angle halfway through the wedge
    pub fn midpoint(self) -> f64 {
        self.start + self.width() / 2.0
    }

    /// Splits the wedge into `count` equal consecutive slices.
    ///
    /// Slice `i` spans `[start + i*step, start + (i+1)*step]` with
    /// `step = width / count`. Its [`midpoint`](Self::midpoint) is the angle a
    /// child is placed at. Yields nothing when `count` is zero.
    pub fn subdivide(self, count: usize) -> impl Iterator<Item = AngleSpan> {
        let step = if count == 0 {
            0.0
        } else {
            self.width() / count as f64
        };

        (0..count).map(move |index| {
            let angle = self.start + index as f64 * step + step / 2.0;
            AngleSpan::new(angle - step / 2.0, angle + step / 2.0)
        })
    }
}

impl Default for AngleSpan {
    fn default() -> Self {
        Self::full()
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn span_strategy() -> impl Strategy<Value = AngleSpan> {
        (-10.0f64..10.0, 0.001f64..TAU)
            .prop_map(|(start, width)| AngleSpan::new(start, start + width))
    }

    /// Slices of a wedge stay inside it and their widths add up to the wedge.
    fn check_subdivide_covers_span(span: AngleSpan, count: usize) -> Result<(), TestCaseError> {
        let slices: Vec<_> = span.subdivide(count).collect();
        prop_assert_eq!(slices.len(), count);

        let total: f64 = slices.iter().map(|slice| slice.width()).sum();
        prop_assert!(approx_eq!(f64, total, span.width(), epsilon = 1e-9));

        for slice in &slices {
            prop_assert!(slice.start() >= span.start() - 1e-9);
            prop_assert!(slice.end() <= span.end() + 1e-9);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn subdivide_covers_span(span in span_strategy(), count in 1usize..32) {
            check_subdivide_covers_span(span, count)?;
        }
    }
}
