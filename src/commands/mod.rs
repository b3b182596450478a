//! Command implementations

pub mod scramble;
pub mod simple;
pub mod simulate;

pub use scramble::{ScrambleResult, scramble_word};
pub use simple::run_simple;
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
