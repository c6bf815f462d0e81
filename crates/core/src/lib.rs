//! # Core - Geometry and Shapes
//!
//! This crate provides the value types and capabilities shared by the
//! playground:
//!
//! - **Geometry**: `Point`, `Size` and `Rect` with a derived, settable center
//! - **Shapes**: the `Shape` capability and its `Square`, `Circle` and
//!   `Triangle` variants
//! - **Descriptions**: `TextRepresentable` for anything that renders as text
//! - **Errors**: dimension validation at construction time
//!
//! ## Design Philosophy
//!
//! Values, not identities. Every type here is `Copy` or owned outright, so a
//! change is always visible exactly where it was made. Polymorphism goes
//! through traits rather than inheritance.

pub mod describe;
pub mod error;
pub mod geometry;
pub mod shape;

// Re-export key types at crate root for convenience
pub use describe::{describe_all, TextRepresentable};
pub use error::CoreError;
pub use geometry::{Point, Rect, Size};
pub use shape::{AnyShape, Circle, Shape, Square, Triangle};
