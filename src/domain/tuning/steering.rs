use crate::domain::vector::Vector2D;

/// Gameplay tuning for turning a desired direction into thrust.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringTuning {
    /// Deviation (degrees) above which the damping divisor switches to `off_target_divisor`.
    pub off_target_degrees: f64,

    /// Divisor applied to the speed ratio when heading off target.
    pub off_target_divisor: f64,

    /// Divisor applied to the speed ratio otherwise.
    pub on_target_divisor: f64,

    /// Deviation (degrees) between velocity and target above which an overspeeding
    /// unit brakes instead of steering.
    pub brake_degrees: f64,

    /// Which vector the desired direction is compared against for damping.
    pub damping_reference: DampingReference,

    /// How "already heading to the target" is detected.
    pub alignment: AlignmentCheck,
}

impl Default for SteeringTuning {
    fn default() -> Self {
        Self {
            off_target_degrees: 20.0,
            off_target_divisor: 1.2,
            on_target_divisor: 2.0,
            brake_degrees: 30.0,
            damping_reference: DampingReference::Velocity,
            alignment: AlignmentCheck::Exact,
        }
    }
}

/// Reference vector for the damping-divisor angle test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DampingReference {
    /// The unit's velocity.
    Velocity,
    /// The unit's position read as a vector from the origin. This is how the
    /// first bot build behaved; kept so its runs can be replayed.
    Position,
}

/// Comparison used to decide that the unit is already heading straight at the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlignmentCheck {
    /// Unit direction vectors must be bit-for-bit equal.
    Exact,
    /// Unit direction vectors may differ by at most this much per component.
    Within(f64),
}

impl AlignmentCheck {
    pub fn aligned(self, a: Vector2D, b: Vector2D) -> bool {
        match self {
            AlignmentCheck::Exact => a == b,
            AlignmentCheck::Within(epsilon) => {
                (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon
            }
        }
    }
}
