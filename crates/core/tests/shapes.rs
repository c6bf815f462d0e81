//! # Shape Tests
//!
//! - every variant reports a non-negative area
//! - descriptions come from the dimensions
//! - the closed enum round-trips through JSON with a `kind` tag

use playground_core::{describe_all, AnyShape, Circle, CoreError, Shape, Square, Triangle};
use proptest::prelude::*;

proptest! {
    #[test]
    fn square_area_non_negative(side in 0.0..1e6f64) {
        prop_assert!(Square::new(side).unwrap().area() >= 0.0);
    }

    #[test]
    fn circle_area_non_negative(r in 0.0..1e6f64) {
        prop_assert!(Circle::new(r).unwrap().area() >= 0.0);
    }

    #[test]
    fn triangle_area_non_negative(a in 0.0..1e3f64, b in 0.0..1e3f64, t in 0.0..1.0f64) {
        // c chosen inside [|a - b|, a + b] so the triangle is valid
        let lo = (a - b).abs();
        let c = lo + t * (a + b - lo);
        if let Ok(tri) = Triangle::new(a, b, c) {
            prop_assert!(tri.area() >= 0.0);
        }
    }
}

#[test]
fn describe_does_not_mutate() {
    let s = Square::new(2.0).unwrap();
    let before = s;
    let _ = s.describe();
    let _ = s.describe();
    assert_eq!(s, before);
}

#[test]
fn any_shape_json_tag() {
    let shape: AnyShape = Circle::new(1.5).unwrap().into();
    let json = serde_json::to_string(&shape).unwrap();
    assert!(json.contains("\"kind\":\"circle\""));

    let back: AnyShape = serde_json::from_str(&json).unwrap();
    assert_eq!(back, shape);
}

#[test]
fn mixed_collection_description() {
    let shapes: Vec<AnyShape> = vec![
        Square::new(1.0).unwrap().into(),
        Triangle::new(3.0, 4.0, 5.0).unwrap().into(),
    ];

    assert_eq!(
        describe_all(&shapes),
        "[A square with sides of length 1 and area 1.00, \
A triangle with sides 3, 4 and 5 and area 6.00]"
    );
}

#[test]
fn construction_errors_are_values() {
    let err = Circle::new(-3.0).unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidDimension {
            name: "radius",
            value: -3.0
        }
    );
}

#[test]
fn invalid_json_dimensions_rejected() {
    let err = serde_json::from_str::<AnyShape>(r#"{"kind":"circle","radius":-3.0}"#).unwrap_err();
    assert!(err.to_string().contains("radius"));

    assert!(serde_json::from_str::<AnyShape>(r#"{"kind":"triangle","a":1,"b":1,"c":50}"#).is_err());
    assert!(serde_json::from_str::<Square>(r#"{"side":-0.5}"#).is_err());

    let ok: AnyShape = serde_json::from_str(r#"{"kind":"triangle","a":3,"b":4,"c":5}"#).unwrap();
    assert_eq!(ok.area(), 6.0);
}
