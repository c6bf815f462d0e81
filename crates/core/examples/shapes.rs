//! Shapes and Value Types
//!
//! Run with: cargo run -p playground-core --example shapes
//!
//! This example demonstrates:
//! - Copy semantics of geometry values
//! - The derived, settable center of a rectangle
//! - One capability, several independent shapes

use playground_core::{
    describe_all, AnyShape, Circle, Point, Rect, Shape, Size, Square, TextRepresentable, Triangle,
};

fn main() -> Result<(), playground_core::CoreError> {
    println!("=== Shapes and Value Types ===\n");

    // -------------------------------------------------------------------------
    // 1. Values are copied
    // -------------------------------------------------------------------------
    println!("1. Values Are Copied");
    println!("--------------------\n");

    let square = Rect::new(Point::new(0.0, 0.0), Size::square(10.0)?);
    let mut moved = square;
    moved.set_center(Point::new(15.0, 15.0));

    println!("  original center: {}", square.center());
    println!("  moved origin:    {}", moved.origin);
    println!("  moved center:    {}\n", moved.center());

    // -------------------------------------------------------------------------
    // 2. Shapes share a capability
    // -------------------------------------------------------------------------
    println!("2. Shapes");
    println!("---------\n");

    let shapes: Vec<AnyShape> = vec![
        Square::new(2.0)?.into(),
        Circle::new(1.5)?.into(),
        Triangle::new(3.0, 4.0, 5.0)?.into(),
    ];

    for shape in &shapes {
        println!(
            "  {:<8} area {:>6.2}  perimeter {:>6.2}",
            shape.name(),
            shape.area(),
            shape.perimeter()
        );
    }
    println!();
    println!("  {}", describe_all(&shapes));
    println!();

    // -------------------------------------------------------------------------
    // 3. Invalid input is a value, not a crash
    // -------------------------------------------------------------------------
    println!("3. Validation");
    println!("-------------\n");

    match Triangle::new(1.0, 1.0, 10.0) {
        Ok(t) => println!("  unexpected: {}", t.textual_description()),
        Err(e) => println!("  rejected: {}", e),
    }

    Ok(())
}
