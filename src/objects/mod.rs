pub mod rigid_shape;

pub use rigid_shape::RigidShape;
