// Plain 2D vector algebra shared by pursuit, steering and combat.

use std::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector pointing from `from` to `to`.
    pub fn from_points(from: Vector2D, to: Vector2D) -> Self {
        to - from
    }

    pub fn distance(a: Vector2D, b: Vector2D) -> f64 {
        Self::from_points(a, b).length()
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unsigned angle in degrees, `0.0..=180.0`.
    ///
    /// A zero-length operand has no direction; it counts as aligned and yields `0.0`.
    pub fn angle_between_degrees(self, other: Vector2D) -> f64 {
        let magnitudes = self.length() * other.length();
        if magnitudes == 0.0 {
            return 0.0;
        }
        // Rounding can push the cosine just past +-1, which acos rejects.
        let cos = (self.dot(other) / magnitudes).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }

    /// Rescales to exactly `length`, keeping direction. Zero stays zero.
    pub fn normalize_to_length(self, length: f64) -> Self {
        let current = self.length();
        if current == 0.0 {
            return Self::ZERO;
        }
        self * (length / current)
    }

    /// Caps the length at `max_length`; shorter vectors come back untouched.
    pub fn clamp_length(self, max_length: f64) -> Self {
        let current = self.length();
        if current > max_length {
            return self * (max_length / current);
        }
        self
    }

    /// Braking vector: same magnitude, opposite direction.
    pub fn opposite(self) -> Self {
        -self
    }

    /// Rounds both components to the nearest integer, halves to even.
    pub fn round(self) -> Self {
        Self {
            x: self.x.round_ties_even(),
            y: self.y.round_ties_even(),
        }
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn when_points_are_given_then_vector_runs_from_first_to_second() {
        let v = Vector2D::from_points(Vector2D::new(1.0, 2.0), Vector2D::new(4.0, 6.0));
        assert_eq!(v, Vector2D::new(3.0, 4.0));
        assert!(approx(
            Vector2D::distance(Vector2D::new(1.0, 2.0), Vector2D::new(4.0, 6.0)),
            5.0
        ));
    }

    #[test]
    fn when_vector_is_compared_with_itself_then_angle_is_zero() {
        for v in [
            Vector2D::new(1.0, 0.0),
            Vector2D::new(-3.5, 7.25),
            Vector2D::new(1e-7, -1e-7),
            Vector2D::new(12345.0, 0.001),
            Vector2D::ZERO,
        ] {
            assert!(v.angle_between_degrees(v).abs() < 1e-5, "{v:?}");
        }
    }

    #[test]
    fn when_either_vector_is_zero_then_angle_is_zero() {
        let v = Vector2D::new(0.0, -5.0);
        assert_eq!(v.angle_between_degrees(Vector2D::ZERO), 0.0);
        assert_eq!(Vector2D::ZERO.angle_between_degrees(v), 0.0);
    }

    #[test]
    fn when_vectors_are_perpendicular_or_opposite_then_angle_matches() {
        let right = Vector2D::new(2.0, 0.0);
        assert!(approx(right.angle_between_degrees(Vector2D::new(0.0, 3.0)), 90.0));
        assert!(approx(right.angle_between_degrees(Vector2D::new(-1.0, 0.0)), 180.0));
    }

    #[test]
    fn when_normalizing_nonzero_vector_then_length_matches_and_direction_is_kept() {
        let v = Vector2D::new(3.0, -4.0);
        for target in [0.5, 1.0, 5.0, 10.0, 250.0] {
            let n = v.normalize_to_length(target);
            assert!(approx(n.length(), target));
            assert!(n.angle_between_degrees(v) < 1e-5);
        }
    }

    #[test]
    fn when_normalizing_zero_vector_then_result_is_zero() {
        assert_eq!(Vector2D::ZERO.normalize_to_length(10.0), Vector2D::ZERO);
    }

    #[test]
    fn when_vector_is_within_limit_then_clamp_returns_it_unchanged() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.clamp_length(5.0), v);
        assert_eq!(v.clamp_length(100.0), v);
        assert_eq!(Vector2D::ZERO.clamp_length(1.0), Vector2D::ZERO);
    }

    #[test]
    fn when_vector_exceeds_limit_then_clamp_scales_it_to_limit() {
        let v = Vector2D::new(30.0, 40.0);
        let c = v.clamp_length(10.0);
        assert!(approx(c.length(), 10.0));
        assert!(approx(c.x, 6.0));
        assert!(approx(c.y, 8.0));
    }

    #[test]
    fn when_short_vector_is_normalized_then_it_grows_but_clamp_leaves_it() {
        let v = Vector2D::new(0.3, 0.4);
        assert!(approx(v.normalize_to_length(1.0).length(), 1.0));
        assert_eq!(v.clamp_length(1.0), v);
    }

    #[test]
    fn when_opposite_is_taken_then_components_are_negated() {
        assert_eq!(Vector2D::new(2.0, -7.0).opposite(), Vector2D::new(-2.0, 7.0));
    }

    #[test]
    fn when_rounding_halves_then_ties_go_to_even() {
        assert_eq!(Vector2D::new(2.5, -3.5).round(), Vector2D::new(2.0, -4.0));
        assert_eq!(Vector2D::new(1.4, 1.6).round(), Vector2D::new(1.0, 2.0));
    }
}
