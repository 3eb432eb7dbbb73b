pub mod collision;
pub mod common;
pub mod debug_draw;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::CollisionInfo;
pub use common::Material;
pub use debug_draw::{DebugDraw, LineRecorder};
pub use error::PhysicsError;
pub use math::{Transform, Vec2};
pub use objects::RigidShape;
pub use shapes::{Circle, Rectangle, Shape};
pub use world::{BodySet, Physics, PhysicsConfig};
