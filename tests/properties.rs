use proptest::prelude::*;
use rigid_physics::{BodySet, Material, Physics, RigidShape, Transform, Vec2};

const EPSILON: f64 = 1e-9;

fn circle(center: Vec2, radius: f64) -> RigidShape {
    RigidShape::circle(Transform::new(center, 0.0, radius, radius), radius)
}

fn rect(center: Vec2, rotation: f64, width: f64, height: f64) -> RigidShape {
    RigidShape::rectangle(Transform::new(center, rotation, width, height), width, height)
}

fn arb_point() -> impl Strategy<Value = Vec2> {
    (-10.0..10.0f64, -10.0..10.0f64).prop_map(|(x, y)| Vec2::new(x, y))
}

fn arb_body() -> impl Strategy<Value = RigidShape> {
    prop_oneof![
        (arb_point(), 0.1..3.0f64).prop_map(|(c, r)| circle(c, r)),
        (arb_point(), 0.0..6.3f64, 0.1..4.0f64, 0.1..4.0f64).prop_map(|(c, rot, w, h)| rect(c, rot, w, h)),
    ]
}

proptest! {
    #[test]
    fn circle_contacts_are_symmetric(a in arb_point(), ra in 0.1..3.0f64, b in arb_point(), rb in 0.1..3.0f64) {
        let (s1, s2) = (circle(a, ra), circle(b, rb));
        let ab = s1.collision_test(&s2);
        let ba = s2.collision_test(&s1);
        prop_assert_eq!(ab.is_some(), ba.is_some());
        if let (Some(ab), Some(ba)) = (ab, ba) {
            prop_assert!((ab.depth - ba.depth).abs() < EPSILON);
            if a.distance(b) > 1e-6 {
                prop_assert!((ab.normal + ba.normal).magnitude() < EPSILON);
            }
        }
    }

    #[test]
    fn failed_bound_test_means_no_contact(s1 in arb_body(), s2 in arb_body()) {
        if !s1.bound_test(&s2) {
            prop_assert!(s1.collision_test(&s2).is_none());
            prop_assert!(s2.collision_test(&s1).is_none());
        }
    }

    #[test]
    fn contact_normals_are_unit_length(s1 in arb_body(), s2 in arb_body()) {
        if let Some(info) = s1.collision_test(&s2) {
            prop_assert!((info.normal.magnitude() - 1.0).abs() < 1e-6);
            prop_assert!(info.depth >= 0.0);
            prop_assert!(info.depth.is_finite());
        }
    }

    #[test]
    fn static_bodies_never_move(
        wall in (arb_point(), 0.0..6.3f64, 0.5..4.0f64, 0.5..4.0f64),
        offset in arb_point(),
        velocity in arb_point(),
        rotational in any::<bool>(),
    ) {
        let (center, rotation, w, h) = wall;
        let mut fixed = rect(center, rotation, w, h).with_mass(0.0);
        let mut mover = circle(center + offset * 0.2, 1.0).with_velocity(velocity);
        let mut physics = Physics::default();
        if rotational {
            physics.toggle_rotational_response();
        }
        let before = fixed.clone();
        physics.collide_shape(&mut fixed, &mut mover, None);
        physics.collide_shape(&mut mover, &mut fixed, None);
        prop_assert_eq!(fixed.center(), before.center());
        prop_assert_eq!(fixed.velocity, Vec2::ZERO);
    }

    #[test]
    fn correction_shrinks_overlap_without_overshoot(
        angle in 0.0..6.3f64,
        ra in 0.5..2.0f64,
        rb in 0.5..2.0f64,
        overlap in 0.05..0.5f64,
    ) {
        let physics = Physics::default();
        let direction = Vec2::new(angle.cos(), angle.sin());
        let mut s1 = circle(Vec2::ZERO, ra);
        let mut s2 = circle(direction * (ra + rb - overlap), rb);
        let info = s1.collision_test(&s2).unwrap();
        physics.positional_correction(&mut s1, &mut s2, &info);
        let gap = s1.center().distance(s2.center()) - (ra + rb);
        prop_assert!(gap < 0.0);
        prop_assert!(-gap < info.depth);
    }

    #[test]
    fn separated_bodies_are_left_untouched(radii in proptest::collection::vec(0.1..0.9f64, 1..12)) {
        let physics = Physics::default();
        let mut set: BodySet = radii
            .iter()
            .enumerate()
            .map(|(i, r)| circle(Vec2::new(i as f64 * 2.0, 0.0), *r).with_velocity(Vec2::new(0.0, *r)))
            .collect();
        let before = set.clone();
        prop_assert!(!physics.process_set(&mut set, None));
        for (after, before) in set.iter().zip(before.iter()) {
            prop_assert_eq!(after, before);
        }
    }

    #[test]
    fn corner_region_normal_points_from_corner(angle in 0.1..1.47f64, dist in 0.1..0.9f64) {
        let corner = Vec2::new(1.0, 1.0);
        let direction = Vec2::new(angle.cos(), angle.sin());
        let block = rect(Vec2::ZERO, 0.0, 2.0, 2.0);
        let ball = circle(corner + direction * dist, 1.0);
        let info = block.collision_test(&ball).unwrap();
        prop_assert!((info.normal - direction).magnitude() < 1e-6);
        prop_assert!((info.depth - (1.0 - dist)).abs() < 1e-6);
    }

    #[test]
    fn elastic_head_on_swaps_velocities(speed in 0.1..20.0f64, angle in 0.0..6.3f64) {
        let physics = Physics::default();
        let elastic = Material::new(1.0, 0.0);
        let axis = Vec2::new(angle.cos(), angle.sin());
        let mut s1 = circle(Vec2::ZERO, 1.0).with_material(elastic).with_velocity(axis * speed);
        let mut s2 = circle(axis * 1.9, 1.0).with_material(elastic).with_velocity(axis * -speed);
        let info = s1.collision_test(&s2).unwrap();
        physics.resolve_collision(&mut s1, &mut s2, &info);
        prop_assert!((s1.velocity + axis * speed).magnitude() < 1e-6);
        prop_assert!((s2.velocity - axis * speed).magnitude() < 1e-6);
    }
}
