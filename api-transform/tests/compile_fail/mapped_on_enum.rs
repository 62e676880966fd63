//! Test: `Mapped` only describes structs with named fields.

use api_transform::Mapped;

#[derive(Mapped)]
enum Shape {
    Circle,
}

fn main() {
    let _ = Shape::Circle;
}
