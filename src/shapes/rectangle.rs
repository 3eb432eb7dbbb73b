use crate::math::{Transform, Vec2};

/// Oriented box kept as 4 world-space corners and 4 outward face normals.
///
/// Vertices wind counter-clockwise starting at the local (-w/2, -h/2) corner.
/// Face `i` runs from `vertices[i]` to `vertices[(i + 1) % 4]` and
/// `face_normals[i]` is its outward unit normal. Both arrays are rebuilt from
/// the owning transform by [`Rectangle::update_geometry`], never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
    pub vertices: [Vec2; 4],
    pub face_normals: [Vec2; 4],
}

impl Rectangle {
    pub fn new(width: f64, height: f64, transform: &Transform) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "rectangle size must be non-negative");
        let mut rect = Self {
            width: width.max(0.0),
            height: height.max(0.0),
            vertices: [Vec2::ZERO; 4],
            face_normals: [Vec2::ZERO; 4],
        };
        rect.update_geometry(transform);
        rect
    }

    /// Recomputes corners and face normals from the transform's position and
    /// rotation.
    pub fn update_geometry(&mut self, transform: &Transform) {
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        let local = [
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ];
        for (vertex, corner) in self.vertices.iter_mut().zip(local) {
            *vertex = transform.apply(corner);
        }
        self.compute_face_normals();
    }

    fn compute_face_normals(&mut self) {
        for i in 0..4 {
            let v = self.vertices[(i + 1) % 4];
            let nv = self.vertices[(i + 2) % 4];
            self.face_normals[i] = (v - nv).normalize();
        }
    }

    /// Half of the diagonal: the circumscribing radius.
    pub fn bound_radius(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt() / 2.0
    }

    pub fn inertia(&self, mass: f64) -> f64 {
        mass * (self.width * self.width + self.height * self.height) / 12.0
    }

    pub fn inc_size_by(&mut self, delta: f64, transform: &Transform) {
        self.width = (self.width + delta).max(0.0);
        self.height = (self.height + delta).max(0.0);
        self.update_geometry(transform);
    }

    /// Min/max of the corners projected onto `axis`.
    pub fn project(&self, axis: Vec2) -> (f64, f64) {
        self.vertices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            let p = v.dot(axis);
            (lo.min(p), hi.max(p))
        })
    }

    /// Corner with the smallest projection onto `direction`, plus the next
    /// corner when it lies within `tolerance` of it (an edge facing
    /// `direction`). Ties keep vertex order.
    pub fn support_corners(&self, direction: Vec2, tolerance: f64) -> (Vec2, Option<Vec2>) {
        let projections = self.vertices.map(|v| v.dot(direction));
        let mut order = [0, 1, 2, 3];
        order.sort_by(|&i, &j| projections[i].total_cmp(&projections[j]));

        let first = self.vertices[order[0]];
        let second = if projections[order[1]] - projections[order[0]] <= tolerance {
            Some(self.vertices[order[1]])
        } else {
            None
        };
        (first, second)
    }
}
