use crate::math::Vec2;
use crate::objects::RigidShape;

/// Advances one body with symplectic (semi-implicit) Euler.
///
/// Velocity is updated from the acceleration first, then the new velocity
/// moves the body. Rotation is kept in [0, 2π). Cached shape geometry is
/// refreshed at the new pose.
pub fn travel(body: &mut RigidShape, acceleration: Vec2, dt: f64) {
    // --- linear --- //
    body.velocity += acceleration * dt;
    body.transform.inc_position_by(body.velocity * dt);

    // --- angular --- //
    body.transform.inc_rotation_by(body.angular_velocity * dt);

    body.shape.update_geometry(&body.transform);
}
