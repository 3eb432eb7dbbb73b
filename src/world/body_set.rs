use crate::debug_draw::DebugDraw;
use crate::objects::RigidShape;
use crate::world::PhysicsConfig;

/// Ordered body collection. Insertion order is the pairing order used by
/// the engine, so it decides which body of a pair is "first".
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    bodies: Vec<RigidShape>,
}

impl BodySet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body and returns its index.
    pub fn add(&mut self, body: RigidShape) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// Removes a body, shifting the later ones down by one. Never call this
    /// while a physics pass is running over the set.
    pub fn remove(&mut self, index: usize) -> Option<RigidShape> {
        if index < self.bodies.len() {
            Some(self.bodies.remove(index))
        } else {
            None
        }
    }

    /// Body at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&RigidShape> {
        self.bodies.get(index)
    }

    /// Mutable body at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut RigidShape> {
        self.bodies.get_mut(index)
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// True when the set holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RigidShape> {
        self.bodies.iter()
    }

    /// Mutable bodies in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, RigidShape> {
        self.bodies.iter_mut()
    }

    /// All bodies as one slice, for pair sweeps.
    pub fn as_mut_slice(&mut self) -> &mut [RigidShape] {
        &mut self.bodies
    }

    /// Integrates every body for one tick.
    pub fn update(&mut self, config: &PhysicsConfig) {
        for body in &mut self.bodies {
            body.update(config);
        }
    }

    /// Draws every body.
    pub fn draw(&self, drawer: &mut dyn DebugDraw) {
        for body in &self.bodies {
            body.draw(drawer);
        }
    }

    /// Mutable references to two distinct bodies.
    /// Panics if the indices are equal or out of bounds.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> (&mut RigidShape, &mut RigidShape) {
        pair_mut(&mut self.bodies, a, b)
    }
}

pub(crate) fn pair_mut(
    bodies: &mut [RigidShape],
    a: usize,
    b: usize,
) -> (&mut RigidShape, &mut RigidShape) {
    assert_ne!(a, b, "a body cannot be paired with itself");
    assert!(a < bodies.len() && b < bodies.len(), "body index out of bounds");

    if a < b {
        let (head, tail) = bodies.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}

impl FromIterator<RigidShape> for BodySet {
    fn from_iter<I: IntoIterator<Item = RigidShape>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BodySet {
    type Item = &'a RigidShape;
    type IntoIter = std::slice::Iter<'a, RigidShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug_draw::LineRecorder;
    use crate::math::{Transform, Vec2};

    fn circle_at(x: f64) -> RigidShape {
        RigidShape::circle(Transform::new(Vec2::new(x, 0.0), 0.0, 1.0, 1.0), 1.0)
    }

    #[test]
    fn test_add_returns_insertion_index() {
        let mut set = BodySet::new();
        assert!(set.is_empty());
        assert_eq!(set.add(circle_at(0.0)), 0);
        assert_eq!(set.add(circle_at(5.0)), 1);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).map(|b| b.center().x), Some(5.0));
        assert!(set.get(2).is_none());
    }

    #[test]
    fn test_remove_shifts_later_bodies() {
        let mut set: BodySet = (0..3).map(|i| circle_at(i as f64)).collect();
        let removed = set.remove(0).unwrap();
        assert_eq!(removed.center().x, 0.0);
        assert_eq!(set.get(0).unwrap().center().x, 1.0);
        assert!(set.remove(10).is_none());
    }

    #[test]
    fn test_pair_mut_either_order() {
        let mut set: BodySet = (0..3).map(|i| circle_at(i as f64)).collect();
        {
            let (a, b) = set.pair_mut(2, 0);
            assert_eq!(a.center().x, 2.0);
            assert_eq!(b.center().x, 0.0);
            a.velocity = Vec2::new(1.0, 0.0);
        }
        let (a, b) = set.pair_mut(0, 2);
        assert_eq!(a.center().x, 0.0);
        assert_eq!(b.velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn test_pair_mut_same_index_panics() {
        let mut set: BodySet = (0..2).map(|i| circle_at(i as f64)).collect();
        set.pair_mut(1, 1);
    }

    #[test]
    fn test_update_moves_dynamic_bodies_only() {
        let mut set = BodySet::new();
        set.add(circle_at(0.0));
        set.add(circle_at(5.0).with_mass(0.0));
        set.update(&PhysicsConfig::default());
        assert!(set.get(0).unwrap().center().y < 0.0);
        assert_eq!(set.get(1).unwrap().center(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_draw_visits_every_body() {
        let set: BodySet = (0..2).map(|i| circle_at(i as f64 * 3.0)).collect();
        let mut rec = LineRecorder::default();
        set.draw(&mut rec);
        assert!(!rec.lines.is_empty());
        assert_eq!(set.iter().count(), 2);
    }
}
