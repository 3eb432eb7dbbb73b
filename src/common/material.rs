//! Surface properties used by collision response.

use serde::{Deserialize, Serialize};

/// Restitution and friction of a body's surface.
///
/// Values are stored as given. Restitution is conventionally in [0, 1] and
/// friction non-negative, but neither is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Bounciness. 0 = no bounce, 1 = perfectly elastic.
    pub restitution: f64,
    /// Friction coefficient.
    pub friction: f64,
}

impl Material {
    pub const ICE: Material = Material { restitution: 0.6, friction: 0.01 };
    pub const MUD: Material = Material { restitution: 0.01, friction: 0.1 };
    pub const WOOD: Material = Material { restitution: 0.8, friction: 0.5 };
    pub const DIRT: Material = Material { restitution: 0.3, friction: 0.7 };

    pub fn new(restitution: f64, friction: f64) -> Self {
        debug_assert!(friction >= 0.0, "friction must be non-negative");
        Material { restitution, friction }
    }

    /// Combined material for a contact: the smaller of each coefficient.
    pub fn combine(self, other: Material) -> Material {
        Material {
            restitution: self.restitution.min(other.restitution),
            friction: self.friction.min(other.friction),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            restitution: 0.2,
            friction: 0.8,
        }
    }
}
