use super::vec2::Vec2;
use std::f64::consts::TAU;

/// Position, rotation and size of a shape owner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Vec2,
    rotation: f64, // radians, always in [0, 2PI)
    size: Vec2,    // (width, height)
}

impl Transform {
    /// Creates a transform. `rotation` is wrapped into [0, 2PI) and negative
    /// sizes are clamped to zero.
    pub fn new(position: Vec2, rotation: f64, width: f64, height: f64) -> Self {
        let mut xf = Self {
            position,
            rotation: 0.0,
            size: Vec2::ZERO,
        };
        xf.set_rotation(rotation);
        xf.set_size(width, height);
        xf
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn inc_position_by(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation = wrap_to_full_turn(radians);
    }

    pub fn inc_rotation_by(&mut self, radians: f64) {
        self.set_rotation(self.rotation + radians);
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        debug_assert!(width >= 0.0 && height >= 0.0, "transform size must be non-negative");
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Grows (or shrinks, for negative `delta`) both dimensions.
    pub fn inc_size_by(&mut self, delta: f64) {
        self.size = Vec2::new((self.size.x + delta).max(0.0), (self.size.y + delta).max(0.0));
    }

    /// Maps a point from the owner's local frame into world space
    /// (rotation then translation).
    pub fn apply(&self, local_point: Vec2) -> Vec2 {
        local_point.rotate(self.rotation) + self.position
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0, 1.0, 1.0)
    }
}

/// Wraps an angle into [0, 2PI).
pub fn wrap_to_full_turn(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
