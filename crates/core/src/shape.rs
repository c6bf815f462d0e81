//! # Shapes - A Capability, Not a Class Tree
//!
//! Every shape supports the same small capability set: [`Shape::area`],
//! [`Shape::perimeter`] and [`Shape::describe`]. Variants are independent
//! structs; adding a new one means writing a new `impl Shape`, never touching
//! the existing ones.
//!
//! ## Design Choices
//!
//! Two dispatch styles are offered:
//!
//! - `&dyn Shape` / `Box<dyn Shape>` for open sets of shapes.
//! - [`AnyShape`], a closed enum over the built-in variants, for exhaustive
//!   `match` and serialization.
//!
//! Constructors validate their dimensions, so `area()` is always `>= 0`.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::describe::TextRepresentable;
use crate::error::{check_dimension, CoreError};

/// The capability shared by all shapes.
pub trait Shape {
    /// Short lowercase name, e.g. `"circle"`.
    fn name(&self) -> &'static str;

    /// Enclosed area. Pure and never negative.
    fn area(&self) -> f64;

    /// Length of the boundary.
    fn perimeter(&self) -> f64;

    /// Human-readable description derived from the dimensions.
    fn describe(&self) -> String {
        format!("A {} with area {:.2}", self.name(), self.area())
    }
}

// ============================================================================
// Square
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SquareFields")]
pub struct Square {
    side: f64,
}

#[derive(Deserialize)]
struct SquareFields {
    side: f64,
}

impl TryFrom<SquareFields> for Square {
    type Error = CoreError;

    fn try_from(fields: SquareFields) -> Result<Self, Self::Error> {
        Self::new(fields.side)
    }
}

impl Square {
    pub fn new(side: f64) -> Result<Self, CoreError> {
        Ok(Self {
            side: check_dimension("side", side)?,
        })
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "square"
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn perimeter(&self) -> f64 {
        4.0 * self.side
    }

    fn describe(&self) -> String {
        format!(
            "A square with sides of length {} and area {:.2}",
            self.side,
            self.area()
        )
    }
}

// ============================================================================
// Circle
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleFields")]
pub struct Circle {
    radius: f64,
}

#[derive(Deserialize)]
struct CircleFields {
    radius: f64,
}

impl TryFrom<CircleFields> for Circle {
    type Error = CoreError;

    fn try_from(fields: CircleFields) -> Result<Self, Self::Error> {
        Self::new(fields.radius)
    }
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, CoreError> {
        Ok(Self {
            radius: check_dimension("radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    fn describe(&self) -> String {
        format!(
            "A circle with radius {} and area {:.2}",
            self.radius,
            self.area()
        )
    }
}

// ============================================================================
// Triangle
// ============================================================================

/// A triangle given by its three side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TriangleFields")]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

#[derive(Deserialize)]
struct TriangleFields {
    a: f64,
    b: f64,
    c: f64,
}

impl TryFrom<TriangleFields> for Triangle {
    type Error = CoreError;

    fn try_from(fields: TriangleFields) -> Result<Self, Self::Error> {
        Self::new(fields.a, fields.b, fields.c)
    }
}

impl Triangle {
    /// Create a triangle. Degenerate triangles (`a + b == c`) are allowed and
    /// have zero area.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, CoreError> {
        let a = check_dimension("a", a)?;
        let b = check_dimension("b", b)?;
        let c = check_dimension("c", c)?;

        if a + b < c || a + c < b || b + c < a {
            return Err(CoreError::InvalidTriangle { a, b, c });
        }

        Ok(Self { a, b, c })
    }

    /// An equilateral triangle.
    pub fn equilateral(side: f64) -> Result<Self, CoreError> {
        Self::new(side, side, side)
    }

    pub fn sides(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
    }

    // Heron's formula. Clamped because rounding can push a degenerate
    // product slightly below zero.
    fn area(&self) -> f64 {
        let s = self.perimeter() / 2.0;
        let product = s * (s - self.a) * (s - self.b) * (s - self.c);
        product.max(0.0).sqrt()
    }

    fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }

    fn describe(&self) -> String {
        format!(
            "A triangle with sides {}, {} and {} and area {:.2}",
            self.a,
            self.b,
            self.c,
            self.area()
        )
    }
}

// ============================================================================
// AnyShape
// ============================================================================

/// Closed set of the built-in shapes.
///
/// Each variant is deserialized through its constructor, so invalid
/// dimensions in JSON are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnyShape {
    Square(Square),
    Circle(Circle),
    Triangle(Triangle),
}

impl AnyShape {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            AnyShape::Square(s) => s,
            AnyShape::Circle(c) => c,
            AnyShape::Triangle(t) => t,
        }
    }
}

impl Shape for AnyShape {
    fn name(&self) -> &'static str {
        self.as_shape().name()
    }

    fn area(&self) -> f64 {
        self.as_shape().area()
    }

    fn perimeter(&self) -> f64 {
        self.as_shape().perimeter()
    }

    fn describe(&self) -> String {
        self.as_shape().describe()
    }
}

impl From<Square> for AnyShape {
    fn from(s: Square) -> Self {
        AnyShape::Square(s)
    }
}

impl From<Circle> for AnyShape {
    fn from(c: Circle) -> Self {
        AnyShape::Circle(c)
    }
}

impl From<Triangle> for AnyShape {
    fn from(t: Triangle) -> Self {
        AnyShape::Triangle(t)
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl TextRepresentable for Square {
    fn textual_description(&self) -> String {
        self.describe()
    }
}

impl TextRepresentable for Circle {
    fn textual_description(&self) -> String {
        self.describe()
    }
}

impl TextRepresentable for Triangle {
    fn textual_description(&self) -> String {
        self.describe()
    }
}

impl TextRepresentable for AnyShape {
    fn textual_description(&self) -> String {
        self.describe()
    }
}

/// Sum of the areas of a mixed collection.
pub fn total_area(shapes: &[&dyn Shape]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square() {
        let s = Square::new(3.0).unwrap();
        assert_eq!(s.area(), 9.0);
        assert_eq!(s.perimeter(), 12.0);
        assert_eq!(s.describe(), "A square with sides of length 3 and area 9.00");
    }

    #[test]
    fn test_circle() {
        let c = Circle::new(2.0).unwrap();
        assert!((c.area() - 4.0 * PI).abs() < 1e-12);
        assert!(c.describe().starts_with("A circle with radius 2"));
    }

    #[test]
    fn test_triangle_heron() {
        let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert!((t.area() - 6.0).abs() < 1e-12);
        assert_eq!(t.perimeter(), 12.0);
    }

    #[test]
    fn test_degenerate_triangle_has_zero_area() {
        let t = Triangle::new(1.0, 2.0, 3.0).unwrap();
        assert_eq!(t.area(), 0.0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Square::new(-1.0),
            Err(CoreError::InvalidDimension { name: "side", .. })
        ));
        assert!(Circle::new(f64::NAN).is_err());
        assert!(matches!(
            Triangle::new(1.0, 1.0, 5.0),
            Err(CoreError::InvalidTriangle { .. })
        ));
    }

    #[test]
    fn test_dynamic_dispatch() {
        let square = Square::new(2.0).unwrap();
        let circle = Circle::new(1.0).unwrap();
        let shapes: Vec<&dyn Shape> = vec![&square, &circle];

        assert!((total_area(&shapes) - (4.0 + PI)).abs() < 1e-12);
    }

    #[test]
    fn test_any_shape_matches_variant() {
        let t = Triangle::equilateral(2.0).unwrap();
        let any = AnyShape::from(t);

        assert_eq!(any.name(), "triangle");
        assert_eq!(any.area(), t.area());
        assert_eq!(any.describe(), t.describe());
        assert_eq!(any.to_string(), t.describe());
    }

    // A new variant only needs its own impl.
    struct Hexagon {
        side: f64,
    }

    impl Shape for Hexagon {
        fn name(&self) -> &'static str {
            "hexagon"
        }

        fn area(&self) -> f64 {
            3.0 * 3f64.sqrt() / 2.0 * self.side * self.side
        }

        fn perimeter(&self) -> f64 {
            6.0 * self.side
        }
    }

    #[test]
    fn test_new_variant_uses_default_describe() {
        let h = Hexagon { side: 1.0 };
        assert_eq!(h.describe(), "A hexagon with area 2.60");
    }
}
