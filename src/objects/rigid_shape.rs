use crate::collision::{self, CollisionInfo};
use crate::common::Material;
use crate::debug_draw::{DebugDraw, BLACK, WHITE};
use crate::integration::integrator;
use crate::math::{Transform, Vec2};
use crate::shapes::{Circle, Rectangle, Shape};
use crate::world::PhysicsConfig;
use std::fmt;

/// Per-body physics state of a shape owner.
///
/// The transform and the cached shape geometry are only changed through
/// methods that keep the two consistent. Velocity, angular velocity and
/// material are plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidShape {
    pub(crate) transform: Transform,
    pub(crate) shape: Shape,
    inv_mass: f64, // 0.0 for static bodies
    inv_inertia: f64,
    bound_radius: f64,
    acceleration: Option<Vec2>, // None: follow the system acceleration

    pub velocity: Vec2,
    pub angular_velocity: f64, // radians per second
    pub material: Material,

    draw_bounds: bool,
}

impl RigidShape {
    /// Dynamic circle of mass 1 centered on the transform's position.
    pub fn circle(transform: Transform, radius: f64) -> Self {
        Self::from_shape(transform, Shape::Circle(Circle::new(radius)))
    }

    /// Dynamic rectangle of mass 1 centered on the transform's position.
    pub fn rectangle(transform: Transform, width: f64, height: f64) -> Self {
        let rect = Rectangle::new(width, height, &transform);
        Self::from_shape(transform, Shape::Rectangle(rect))
    }

    fn from_shape(transform: Transform, shape: Shape) -> Self {
        let mut body = Self {
            transform,
            bound_radius: shape.bound_radius(),
            shape,
            inv_mass: 1.0,
            inv_inertia: 0.0,
            acceleration: None,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            material: Material::default(),
            draw_bounds: false,
        };
        body.update_inertia();
        body
    }

    /// Sets the mass; see [`RigidShape::set_mass`].
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.set_mass(mass);
        self
    }

    /// Sets restitution and friction.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Sets the initial linear velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Overrides the system acceleration for this body.
    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = Some(acceleration);
        self
    }

    // --- mass ---

    /// A mass of zero (or less) makes the body static.
    pub fn set_mass(&mut self, mass: f64) {
        debug_assert!(mass >= 0.0, "mass must not be negative");
        self.inv_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };
        self.update_inertia();
    }

    /// Mass, or 0 for a static body.
    pub fn mass(&self) -> f64 {
        if self.inv_mass > 0.0 {
            1.0 / self.inv_mass
        } else {
            0.0
        }
    }

    /// Inverse mass; 0 means static.
    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    /// Inverse moment of inertia about the center; 0 for static bodies.
    pub fn inv_inertia(&self) -> f64 {
        self.inv_inertia
    }

    /// True when the body has infinite mass.
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    fn update_inertia(&mut self) {
        self.inv_inertia = if self.is_static() {
            0.0
        } else {
            let inertia = self.shape.inertia(self.mass());
            if inertia > 0.0 {
                1.0 / inertia
            } else {
                0.0
            }
        };
    }

    // --- geometry ---

    /// Shape with its cached world-space geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Position, rotation and size.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Replaces the transform. A circle takes its radius from the new
    /// transform's width.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
        if let Shape::Circle(circle) = &mut self.shape {
            circle.radius = transform.width();
        }
        self.refresh_shape();
    }

    /// World-space center.
    pub fn center(&self) -> Vec2 {
        self.transform.position()
    }

    /// Moves the center and rebuilds rectangle corners.
    pub fn set_position(&mut self, position: Vec2) {
        self.transform.set_position(position);
        self.shape.update_geometry(&self.transform);
    }

    /// Sets the rotation in radians, wrapped into [0, 2π).
    pub fn set_rotation(&mut self, radians: f64) {
        self.transform.set_rotation(radians);
        self.shape.update_geometry(&self.transform);
    }

    /// Radius of the bounding circle used by the broad phase.
    pub fn bound_radius(&self) -> f64 {
        self.bound_radius
    }

    /// Grows the shape (radius, or both rectangle sides) by `delta`.
    pub fn inc_shape_size_by(&mut self, delta: f64) {
        self.shape.inc_size_by(delta, &self.transform);
        self.refresh_shape();
    }

    fn refresh_shape(&mut self) {
        self.shape.update_geometry(&self.transform);
        self.bound_radius = self.shape.bound_radius();
        self.update_inertia();
    }

    /// `position += direction * scale`. Used by positional correction; does
    /// not touch velocity.
    pub fn adjust_position_by(&mut self, direction: Vec2, scale: f64) {
        self.transform.inc_position_by(direction * scale);
        self.shape.update_geometry(&self.transform);
    }

    // --- motion ---

    /// Explicit acceleration, if one was set.
    pub fn acceleration_override(&self) -> Option<Vec2> {
        self.acceleration
    }

    /// `None` reverts to the system acceleration.
    pub fn set_acceleration(&mut self, acceleration: Option<Vec2>) {
        self.acceleration = acceleration;
    }

    /// Acceleration actually applied during integration. Always zero for
    /// static bodies.
    pub fn effective_acceleration(&self, system_acceleration: Vec2) -> Vec2 {
        if self.is_static() {
            Vec2::ZERO
        } else {
            self.acceleration.unwrap_or(system_acceleration)
        }
    }

    /// Replaces the linear velocity.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Reverses the linear velocity.
    pub fn flip_velocity(&mut self) {
        self.velocity = -self.velocity;
    }

    /// Angular velocity in radians per second.
    pub fn set_angular_velocity(&mut self, omega: f64) {
        self.angular_velocity = omega;
    }

    /// Adds `delta` radians per second.
    pub fn add_angular_velocity(&mut self, delta: f64) {
        self.angular_velocity += delta;
    }

    /// Advances the body by one tick unless it is static or motion is
    /// switched off.
    pub fn update(&mut self, config: &PhysicsConfig) {
        if self.is_static() || !config.has_motion {
            return;
        }
        self.travel(config.update_interval, config.system_acceleration);
    }

    /// One integration step of `dt` seconds, ignoring the motion toggle.
    pub fn travel(&mut self, dt: f64, system_acceleration: Vec2) {
        let acceleration = self.effective_acceleration(system_acceleration);
        integrator::travel(self, acceleration, dt);
    }

    // --- collision ---

    /// Broad phase: true iff the bounding circles touch or overlap.
    pub fn bound_test(&self, other: &RigidShape) -> bool {
        let distance = self.center().distance(other.center());
        distance <= self.bound_radius + other.bound_radius
    }

    /// Narrow phase. The normal points from `self` toward `other`.
    pub fn collision_test(&self, other: &RigidShape) -> Option<CollisionInfo> {
        collision::collision_test(self, other)
    }

    // --- debug drawing ---

    /// Switches drawing of the bounding circle and center cross.
    pub fn toggle_draw_bounds(&mut self) {
        self.draw_bounds = !self.draw_bounds;
    }

    /// Whether bounds are drawn.
    pub fn draws_bounds(&self) -> bool {
        self.draw_bounds
    }

    /// Emits the outline (and bounds when toggled) as debug lines.
    pub fn draw(&self, drawer: &mut dyn DebugDraw) {
        let center = self.center();
        match &self.shape {
            Shape::Circle(circle) => {
                drawer.draw_circle(center, circle.radius, BLACK);
                // rotation marker
                let tip = (center + Vec2::new(0.0, circle.radius)).rotate_about(center, self.transform.rotation());
                drawer.draw_line(center, tip, WHITE);
            }
            Shape::Rectangle(rect) => {
                for i in 0..4 {
                    drawer.draw_line(rect.vertices[i], rect.vertices[(i + 1) % 4], BLACK);
                }
            }
        }

        if self.draw_bounds {
            drawer.draw_cross(center, self.bound_radius * 0.5, WHITE);
            drawer.draw_circle(center, self.bound_radius, WHITE);
        }
    }
}

impl fmt::Display for RigidShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} M={:.2} V=({:.2}, {:.2}) W={:.2}",
            self.shape.name(),
            self.mass(),
            self.velocity.x,
            self.velocity.y,
            self.angular_velocity
        )
    }
}
