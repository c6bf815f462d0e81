//! # Geometry - Value Types
//!
//! `Point`, `Size` and `Rect` are plain `Copy` values. Assigning one to a
//! new binding or passing it to a function copies it; there is no shared
//! instance to mutate behind someone else's back.
//!
//! `Rect::center` is a derived property. The getter computes
//! `origin + size / 2`; the setter moves the origin so that the requested
//! point becomes the center. The two are inverses:
//!
//! ```rust
//! use playground_core::geometry::{Point, Rect, Size};
//!
//! let mut square = Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0).unwrap());
//! assert_eq!(square.center(), Point::new(5.0, 5.0));
//!
//! square.set_center(Point::new(15.0, 15.0));
//! assert_eq!(square.origin, Point::new(10.0, 10.0));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{check_dimension, CoreError};

// ============================================================================
// Point
// ============================================================================

/// A location in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return a copy moved by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ============================================================================
// Size
// ============================================================================

/// Width and height. Both are non-negative when built through [`Size::new`]
/// or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "SizeFields")]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Deserialize)]
struct SizeFields {
    width: f64,
    height: f64,
}

impl TryFrom<SizeFields> for Size {
    type Error = CoreError;

    fn try_from(fields: SizeFields) -> Result<Self, Self::Error> {
        Self::new(fields.width, fields.height)
    }
}

impl Size {
    /// Create a size, rejecting negative or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, CoreError> {
        Ok(Self {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
        })
    }

    /// A size with equal sides.
    pub fn square(side: f64) -> Result<Self, CoreError> {
        Self::new(side, side)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle: an origin corner plus a size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from an origin and a (validated) size.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle from raw coordinates, validating the size.
    pub fn from_parts(x: f64, y: f64, width: f64, height: f64) -> Result<Self, CoreError> {
        Ok(Self::new(Point::new(x, y), Size::new(width, height)?))
    }

    /// The point halfway across both axes.
    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Move the origin so that `center` becomes the center. The size is kept.
    pub fn set_center(&mut self, center: Point) {
        self.origin.x = center.x - self.size.width / 2.0;
        self.origin.y = center.y - self.size.height / 2.0;
    }

    /// Return a copy centered on `center`, leaving `self` untouched.
    pub fn with_center(mut self, center: Point) -> Self {
        self.set_center(center);
        self
    }

    pub fn area(&self) -> f64 {
        self.size.area()
    }

    /// Whether `point` lies inside the rectangle (edges included).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rect at {} sized {}", self.origin, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_copied_on_assignment() {
        let a = Point::new(1.0, 2.0);
        let mut b = a;
        b.x = 10.0;

        assert_eq!(a.x, 1.0);
        assert_eq!(b.x, 10.0);
    }

    #[test]
    fn test_defaults_are_zero() {
        let r = Rect::default();
        assert_eq!(r.origin, Point::new(0.0, 0.0));
        assert_eq!(r.size.width, 0.0);
        assert_eq!(r.center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_size_rejects_negative() {
        assert!(Size::new(-1.0, 2.0).is_err());
        assert!(Size::new(1.0, -2.0).is_err());
        assert!(Size::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_center_getter() {
        let r = Rect::from_parts(0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(r.center(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_center_setter_moves_origin() {
        let mut r = Rect::from_parts(0.0, 0.0, 10.0, 10.0).unwrap();
        r.set_center(Point::new(15.0, 15.0));

        assert_eq!(r.origin, Point::new(10.0, 10.0));
        assert_eq!(r.size, Size::new(10.0, 10.0).unwrap());
    }

    #[test]
    fn test_set_center_to_current_center_is_noop() {
        let original = Rect::from_parts(3.0, -4.0, 7.0, 2.0).unwrap();
        let mut r = original;
        r.set_center(r.center());
        assert_eq!(r, original);
    }

    #[test]
    fn test_with_center_leaves_original() {
        let r = Rect::from_parts(0.0, 0.0, 4.0, 4.0).unwrap();
        let moved = r.with_center(Point::new(10.0, 10.0));

        assert_eq!(r.center(), Point::new(2.0, 2.0));
        assert_eq!(moved.center(), Point::new(10.0, 10.0));
    }

    #[test]
    fn test_contains() {
        let r = Rect::from_parts(0.0, 0.0, 2.0, 2.0).unwrap();
        assert!(r.contains(Point::new(1.0, 1.0)));
        assert!(r.contains(Point::new(2.0, 0.0)));
        assert!(!r.contains(Point::new(2.5, 1.0)));
    }

    #[test]
    fn test_distance_and_offset() {
        let p = Point::new(0.0, 0.0).offset(3.0, 4.0);
        assert_eq!(p, Point::new(3.0, 4.0));
        assert!((p.distance_to(Point::default()) - 5.0).abs() < 1e-12);
    }
}
