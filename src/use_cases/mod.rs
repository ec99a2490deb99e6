// Use cases layer: per-tick decisions and the loop that drives them.

pub mod decide;
pub mod frame;
pub mod game_loop;
#[cfg(test)]
pub(crate) mod test_support;

pub use decide::decide;
pub use frame::build_frame;
pub use game_loop::{LoopReport, LoopSettings, run_tick_loop};
