/// Gameplay tuning for shields and attacks.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatTuning {
    /// Health at or below which the shield is requested (when off cooldown).
    pub shield_health_threshold: f64,

    /// Aim point = target position + target velocity / `lead_divisor`.
    pub lead_divisor: f64,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            shield_health_threshold: 50.0,
            lead_divisor: 3.0,
        }
    }
}
