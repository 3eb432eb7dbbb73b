use crate::collision::CollisionInfo;
use crate::math::Vec2;
use crate::objects::RigidShape;
use crate::world::body_set::{self, BodySet};
use crate::world::PhysicsConfig;

/// Collision resolution engine.
///
/// Each process call sweeps its pairs `relaxation_count` times. A single
/// sweep only resolves isolated pairs; chains of touching bodies need the
/// repeated passes to settle, and deep stacks may still jitter.
#[derive(Debug, Clone, Default)]
pub struct Physics {
    config: PhysicsConfig,
}

impl Physics {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PhysicsConfig) {
        self.config = config;
    }

    // --- toggles --- //

    pub fn has_motion(&self) -> bool {
        self.config.has_motion
    }

    pub fn toggle_has_motion(&mut self) {
        self.config.has_motion = !self.config.has_motion;
        log::debug!("motion {}", on_off(self.config.has_motion));
    }

    pub fn positional_correction_enabled(&self) -> bool {
        self.config.correct_position
    }

    pub fn toggle_positional_correction(&mut self) {
        self.config.correct_position = !self.config.correct_position;
        log::debug!("positional correction {}", on_off(self.config.correct_position));
    }

    pub fn relaxation_count(&self) -> u32 {
        self.config.relaxation_count
    }

    /// Adds `delta` (possibly negative) to the relaxation count, stopping at 0.
    pub fn inc_relaxation_count(&mut self, delta: i32) {
        self.config.relaxation_count = self.config.relaxation_count.saturating_add_signed(delta);
        log::debug!("relaxation count {}", self.config.relaxation_count);
    }

    pub fn rotational_response(&self) -> bool {
        self.config.rotational_response
    }

    pub fn toggle_rotational_response(&mut self) {
        self.config.rotational_response = !self.config.rotational_response;
        log::debug!("rotational response {}", on_off(self.config.rotational_response));
    }

    pub fn system_acceleration(&self) -> Vec2 {
        self.config.system_acceleration
    }

    pub fn set_system_acceleration(&mut self, acceleration: Vec2) {
        self.config.system_acceleration = acceleration;
    }

    // --- simulation --- //

    /// Integrates every body in the set for one tick.
    pub fn update(&self, set: &mut BodySet) {
        set.update(&self.config);
    }

    /// Detects and resolves one pair. Returns true if the pair collided.
    /// When `infos` is given, the contact is appended to it.
    pub fn collide_shape(
        &self,
        s1: &mut RigidShape,
        s2: &mut RigidShape,
        infos: Option<&mut Vec<CollisionInfo>>,
    ) -> bool {
        if s1.is_static() && s2.is_static() {
            return false;
        }
        if !s1.bound_test(s2) {
            return false;
        }
        let mut info = match s1.collision_test(s2) {
            Some(info) => info,
            None => return false,
        };

        // normal must point from s1 to s2
        if (s2.center() - s1.center()).dot(info.normal) < 0.0 {
            info.change_dir();
        }

        self.positional_correction(s1, s2, &info);
        self.resolve_collision(s1, s2, &info);

        log::trace!(
            "contact depth={:.4} normal=({:.3}, {:.3}) between {} and {}",
            info.depth,
            info.normal.x,
            info.normal.y,
            s1.shape().name(),
            s2.shape().name()
        );
        if let Some(infos) = infos {
            infos.push(info);
        }
        true
    }

    /// Every unordered pair `(i, j)`, `i < j`, in insertion order.
    pub fn process_set(&self, set: &mut BodySet, mut infos: Option<&mut Vec<CollisionInfo>>) -> bool {
        let bodies = set.as_mut_slice();
        let mut had_collision = false;
        for _ in 0..self.config.relaxation_count {
            for i in 0..bodies.len() {
                for j in (i + 1)..bodies.len() {
                    let (s1, s2) = body_set::pair_mut(bodies, i, j);
                    if self.collide_shape(s1, s2, infos.as_deref_mut()) {
                        had_collision = true;
                    }
                }
            }
        }
        had_collision
    }

    /// `obj` against each body of `set`; `obj` is always first in the pair.
    pub fn process_obj_to_set(
        &self,
        obj: &mut RigidShape,
        set: &mut BodySet,
        mut infos: Option<&mut Vec<CollisionInfo>>,
    ) -> bool {
        let mut had_collision = false;
        for _ in 0..self.config.relaxation_count {
            for other in set.iter_mut() {
                if self.collide_shape(obj, other, infos.as_deref_mut()) {
                    had_collision = true;
                }
            }
        }
        had_collision
    }

    /// Every body of `set1` against every body of `set2`.
    pub fn process_set_to_set(
        &self,
        set1: &mut BodySet,
        set2: &mut BodySet,
        mut infos: Option<&mut Vec<CollisionInfo>>,
    ) -> bool {
        let mut had_collision = false;
        for _ in 0..self.config.relaxation_count {
            for s1 in set1.iter_mut() {
                for s2 in set2.iter_mut() {
                    if self.collide_shape(s1, s2, infos.as_deref_mut()) {
                        had_collision = true;
                    }
                }
            }
        }
        had_collision
    }

    /// Pushes the pair apart along the normal, weighted by inverse mass.
    /// Does nothing while correction is switched off.
    pub fn positional_correction(&self, s1: &mut RigidShape, s2: &mut RigidShape, info: &CollisionInfo) {
        if !self.config.correct_position {
            return;
        }
        let inv_sum = s1.inv_mass() + s2.inv_mass();
        if inv_sum == 0.0 {
            return;
        }
        let amount = info.depth / inv_sum * self.config.correction_rate;
        let correction = info.normal * amount;
        let (inv1, inv2) = (s1.inv_mass(), s2.inv_mass());
        s1.adjust_position_by(correction, -inv1);
        s2.adjust_position_by(correction, inv2);
    }

    /// Impulse response for a contact whose normal points from `s1` to `s2`.
    pub fn resolve_collision(&self, s1: &mut RigidShape, s2: &mut RigidShape, info: &CollisionInfo) {
        if s1.is_static() && s2.is_static() {
            return;
        }
        if self.config.rotational_response {
            resolve_with_rotation(s1, s2, info);
        } else {
            resolve_linear(s1, s2, info);
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Unit tangent opposing the tangential part of `relative_velocity`.
/// Zero when there is no sliding.
fn friction_tangent(normal: Vec2, relative_velocity: Vec2, velocity_along_normal: f64) -> Vec2 {
    (normal * velocity_along_normal - relative_velocity).normalize()
}

fn clamp_friction(tangent_impulse: f64, normal_impulse: f64) -> f64 {
    tangent_impulse.min(normal_impulse).max(-normal_impulse)
}

fn resolve_linear(s1: &mut RigidShape, s2: &mut RigidShape, info: &CollisionInfo) {
    let (inv1, inv2) = (s1.inv_mass(), s2.inv_mass());
    let inv_sum = inv1 + inv2;
    let normal = info.normal;

    let relative_velocity = s2.velocity - s1.velocity;
    let velocity_along_normal = relative_velocity.dot(normal);
    // separating or resting
    if velocity_along_normal >= 0.0 {
        return;
    }

    let material = s1.material.combine(s2.material);
    let restitution = material.restitution;

    let jn = -(1.0 + restitution) * velocity_along_normal / inv_sum;
    let impulse = normal * jn;
    s1.velocity -= impulse * inv1;
    s2.velocity += impulse * inv2;

    let tangent = friction_tangent(normal, relative_velocity, velocity_along_normal);
    let velocity_along_tangent = relative_velocity.dot(tangent);
    let jt = -(1.0 + restitution) * velocity_along_tangent * material.friction / inv_sum;
    let jt = clamp_friction(jt, jn);

    let impulse = tangent * jt;
    s1.velocity -= impulse * inv1;
    s2.velocity += impulse * inv2;
}

fn resolve_with_rotation(s1: &mut RigidShape, s2: &mut RigidShape, info: &CollisionInfo) {
    let (inv1, inv2) = (s1.inv_mass(), s2.inv_mass());
    let (inv_i1, inv_i2) = (s1.inv_inertia(), s2.inv_inertia());
    let inv_sum = inv1 + inv2;
    let normal = info.normal;

    // contact point between start and end, nearer the lighter body's side
    let contact = info.start * (inv2 / inv_sum) + info.end * (inv1 / inv_sum);
    let r1 = contact - s1.center();
    let r2 = contact - s2.center();

    let v1 = s1.velocity + r1.perpendicular() * s1.angular_velocity;
    let v2 = s2.velocity + r2.perpendicular() * s2.angular_velocity;
    let relative_velocity = v2 - v1;
    let velocity_along_normal = relative_velocity.dot(normal);
    if velocity_along_normal >= 0.0 {
        return;
    }

    let material = s1.material.combine(s2.material);
    let restitution = material.restitution;

    let r1_cross_n = r1.cross(normal);
    let r2_cross_n = r2.cross(normal);
    let jn = -(1.0 + restitution) * velocity_along_normal
        / (inv_sum + r1_cross_n * r1_cross_n * inv_i1 + r2_cross_n * r2_cross_n * inv_i2);

    let impulse = normal * jn;
    s1.velocity -= impulse * inv1;
    s2.velocity += impulse * inv2;
    s1.angular_velocity -= r1_cross_n * jn * inv_i1;
    s2.angular_velocity += r2_cross_n * jn * inv_i2;

    let tangent = friction_tangent(normal, relative_velocity, velocity_along_normal);
    let velocity_along_tangent = relative_velocity.dot(tangent);
    let r1_cross_t = r1.cross(tangent);
    let r2_cross_t = r2.cross(tangent);
    let jt = -(1.0 + restitution) * velocity_along_tangent * material.friction
        / (inv_sum + r1_cross_t * r1_cross_t * inv_i1 + r2_cross_t * r2_cross_t * inv_i2);
    let jt = clamp_friction(jt, jn);

    let impulse = tangent * jt;
    s1.velocity -= impulse * inv1;
    s2.velocity += impulse * inv2;
    s1.angular_velocity -= r1_cross_t * jt * inv_i1;
    s2.angular_velocity += r2_cross_t * jt * inv_i2;
}
