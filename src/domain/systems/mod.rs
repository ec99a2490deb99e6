// Per-unit decision rules. Pure functions of the current snapshot.

pub mod combat;
pub mod pursuit;
pub mod steering;
