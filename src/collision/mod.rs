pub mod detection;
pub mod info;

// Re-export key types
pub use detection::collision_test;
pub use info::CollisionInfo;
