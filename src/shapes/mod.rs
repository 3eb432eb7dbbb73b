pub mod circle;
pub mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use crate::math::Transform;

/// Geometry of a rigid body. The set of variants is closed so every shape
/// pair has a narrow-phase test (see `collision::detection`).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn bound_radius(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.radius,
            Shape::Rectangle(rect) => rect.bound_radius(),
        }
    }

    pub fn inertia(&self, mass: f64) -> f64 {
        match self {
            Shape::Circle(circle) => circle.inertia(mass),
            Shape::Rectangle(rect) => rect.inertia(mass),
        }
    }

    /// Brings cached geometry back in line with the transform.
    pub fn update_geometry(&mut self, transform: &Transform) {
        if let Shape::Rectangle(rect) = self {
            rect.update_geometry(transform);
        }
    }

    pub fn inc_size_by(&mut self, delta: f64, transform: &Transform) {
        match self {
            Shape::Circle(circle) => circle.inc_size_by(delta),
            Shape::Rectangle(rect) => rect.inc_size_by(delta, transform),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Rectangle(_) => "rectangle",
        }
    }
}
