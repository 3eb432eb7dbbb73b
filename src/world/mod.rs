pub mod body_set;
pub mod config;
pub mod physics;

pub use body_set::BodySet;
pub use config::PhysicsConfig;
pub use physics::Physics;
