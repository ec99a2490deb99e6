pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::runner::run_with_config;
pub use use_cases::{LoopReport, LoopSettings, decide, run_tick_loop};
