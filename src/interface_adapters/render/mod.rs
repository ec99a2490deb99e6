pub mod rewind;

pub use rewind::RewindClient;
