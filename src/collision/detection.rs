use super::info::CollisionInfo;
use crate::math::Vec2;
use crate::objects::RigidShape;
use crate::shapes::{Circle, Rectangle, Shape};

/// Below this, distances and axis lengths count as zero.
const DEGENERATE_EPSILON: f64 = 1e-10;

/// Narrow-phase test between two bodies.
///
/// Every `(Shape, Shape)` combination is matched here, so adding a shape
/// variant does not compile until its pairs are handled. The returned normal
/// points from `a` toward `b`.
pub fn collision_test(a: &RigidShape, b: &RigidShape) -> Option<CollisionInfo> {
    match (a.shape(), b.shape()) {
        (Shape::Circle(circle_a), Shape::Circle(circle_b)) => {
            check_circle_circle(a.center(), circle_a, b.center(), circle_b)
        }
        (Shape::Rectangle(rect), Shape::Circle(circle)) => {
            check_rect_circle(rect, b.center(), circle)
        }
        (Shape::Circle(circle), Shape::Rectangle(rect)) => {
            check_rect_circle(rect, a.center(), circle).map(CollisionInfo::reversed)
        }
        (Shape::Rectangle(rect_a), Shape::Rectangle(rect_b)) => {
            check_rect_rect(a.center(), rect_a, b.center(), rect_b)
        }
    }
}

/// Circle/circle: colliding iff the center distance is strictly less than the
/// sum of the radii. `start` lies on circle B's surface facing A.
pub fn check_circle_circle(
    center_a: Vec2,
    circle_a: &Circle,
    center_b: Vec2,
    circle_b: &Circle,
) -> Option<CollisionInfo> {
    let from_a_to_b = center_b - center_a;
    let radii_sum = circle_a.radius + circle_b.radius;
    let distance = from_a_to_b.magnitude();

    if !(distance < radii_sum) {
        return None;
    }

    let normal = if distance > DEGENERATE_EPSILON {
        from_a_to_b * (1.0 / distance)
    } else {
        log::trace!("coincident circle centers at {:?}, using fallback normal", center_a);
        Vec2::UP
    };
    let start = center_b - normal * circle_b.radius;
    Some(CollisionInfo::new(radii_sum - distance, normal, start))
}

/// Rectangle/circle by Voronoi region of the circle center. The normal points
/// from the rectangle toward the circle and `start` is the circle point
/// deepest toward the rectangle.
pub fn check_rect_circle(rect: &Rectangle, center: Vec2, circle: &Circle) -> Option<CollisionInfo> {
    let radius = circle.radius;

    // Scan faces for the largest signed distance. The first positive one
    // ends the scan and becomes the reference face.
    let mut outside = false;
    let mut best_distance = -f64::MAX;
    let mut nearest_edge = 0;
    let mut i = 0;
    while !outside && i < 4 {
        let projection = (center - rect.vertices[i]).dot(rect.face_normals[i]);
        if projection > best_distance {
            outside = projection > 0.0;
            best_distance = projection;
            nearest_edge = i;
        }
        i += 1;
    }

    let face_normal = rect.face_normals[nearest_edge];

    if !outside {
        // best_distance is negative: center is inside the box
        return Some(face_contact(center, radius, face_normal, best_distance));
    }

    let left = rect.vertices[nearest_edge];
    let right = rect.vertices[(nearest_edge + 1) % 4];
    let edge = right - left;

    let from_left = center - left;
    if from_left.dot(edge) < 0.0 {
        return check_circle_rect_vertex(from_left, center, radius, face_normal);
    }

    let from_right = center - right;
    if from_right.dot(-edge) < 0.0 {
        return check_circle_rect_vertex(from_right, center, radius, face_normal);
    }

    if best_distance < radius {
        Some(face_contact(center, radius, face_normal, best_distance))
    } else {
        None
    }
}

fn face_contact(center: Vec2, radius: f64, face_normal: Vec2, face_distance: f64) -> CollisionInfo {
    CollisionInfo::new(radius - face_distance, face_normal, center - face_normal * radius)
}

/// Circle center in the corner region of a rectangle vertex; `corner_to_center`
/// runs from that vertex to the circle center.
fn check_circle_rect_vertex(
    corner_to_center: Vec2,
    center: Vec2,
    radius: f64,
    face_normal: Vec2,
) -> Option<CollisionInfo> {
    let distance = corner_to_center.magnitude();
    if distance > radius {
        return None;
    }
    let normal = if distance > DEGENERATE_EPSILON {
        corner_to_center * (1.0 / distance)
    } else {
        log::trace!("circle center on rectangle corner at {:?}, using face normal", center);
        face_normal
    };
    Some(CollisionInfo::new(radius - distance, normal, center - normal * radius))
}

/// Rectangle/rectangle separating-axis test over both boxes' face normals.
/// The axis of least overlap becomes the normal (oriented A to B) and the
/// overlap the depth. Zero overlap is treated as separated.
pub fn check_rect_rect(
    center_a: Vec2,
    rect_a: &Rectangle,
    center_b: Vec2,
    rect_b: &Rectangle,
) -> Option<CollisionInfo> {
    let mut min_overlap = f64::INFINITY;
    let mut best_axis = Vec2::ZERO;

    for &axis in rect_a.face_normals.iter().chain(rect_b.face_normals.iter()) {
        if axis.magnitude_squared() < DEGENERATE_EPSILON {
            continue;
        }
        let (min_a, max_a) = rect_a.project(axis);
        let (min_b, max_b) = rect_b.project(axis);
        let overlap = (max_a - min_b).min(max_b - min_a);
        if overlap <= 0.0 {
            return None;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            best_axis = axis;
        }
    }

    if best_axis == Vec2::ZERO {
        return None;
    }

    let mut normal = best_axis;
    if (center_b - center_a).dot(normal) < 0.0 {
        normal = -normal;
    }
    let start = rect_rect_contact_start(rect_a, rect_b, normal, min_overlap);
    Some(CollisionInfo::new(min_overlap, normal, start))
}

/// Contact start on B's side for a rectangle pair.
///
/// Corners of B within `depth` of its deepest corner are all inside A. When
/// only one is, it is the contact. When a B edge is inside, the contact is the
/// middle of that edge clipped to the A corner or edge facing it, so flat
/// resting boxes are pushed through their center.
fn rect_rect_contact_start(rect_a: &Rectangle, rect_b: &Rectangle, normal: Vec2, depth: f64) -> Vec2 {
    let tolerance = depth + DEGENERATE_EPSILON;
    let (b_first, b_second) = rect_b.support_corners(normal, tolerance);
    let b_second = match b_second {
        Some(corner) => corner,
        None => return b_first,
    };

    let face_level = b_first.dot(normal);
    let (a_first, a_second) = rect_a.support_corners(-normal, tolerance);
    let a_second = match a_second {
        Some(corner) => corner,
        // A corner pokes into B's edge: drop it onto that edge
        None => return a_first - normal * (a_first.dot(normal) - face_level),
    };

    let tangent = normal.perpendicular();
    let (b_lo, b_hi) = ordered(b_first.dot(tangent), b_second.dot(tangent));
    let (a_lo, a_hi) = ordered(a_first.dot(tangent), a_second.dot(tangent));
    let (lo, hi) = (b_lo.max(a_lo), b_hi.min(a_hi));
    let along = if lo <= hi { (lo + hi) / 2.0 } else { (b_lo + b_hi) / 2.0 };

    normal * face_level + tangent * along
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
