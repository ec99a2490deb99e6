// Gameplay tuning for the decision engine.
// Keep this separate from runtime configuration (tick cadence, endpoints, etc.).

pub mod combat;
pub mod pursuit;
pub mod steering;

pub use combat::CombatTuning;
pub use pursuit::PursuitTuning;
pub use steering::{AlignmentCheck, DampingReference, SteeringTuning};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DecisionTuning {
    pub pursuit: PursuitTuning,
    pub steering: SteeringTuning,
    pub combat: CombatTuning,
}
