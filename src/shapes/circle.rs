#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        debug_assert!(radius > 0.0, "circle radius must be positive");
        Self { radius }
    }

    /// Moment of inertia of a solid disc about its center.
    pub fn inertia(&self, mass: f64) -> f64 {
        0.5 * mass * self.radius * self.radius
    }

    pub fn inc_size_by(&mut self, delta: f64) {
        self.radius = (self.radius + delta).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(5.0);
        assert_eq!(c.radius, 5.0);
    }

    #[test]
    fn test_circle_inertia() {
        let c = Circle::new(2.0);
        assert_eq!(c.inertia(10.0), 20.0);
    }

    #[test]
    fn test_circle_inc_size_by() {
        let mut c = Circle::new(1.0);
        c.inc_size_by(0.5);
        assert_eq!(c.radius, 1.5);
        c.inc_size_by(-3.0);
        assert_eq!(c.radius, 0.0);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_circle_new_non_positive_radius() {
        Circle::new(0.0);
    }
}
