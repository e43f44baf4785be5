//! Round-robin tournament simulation
//!
//! Each list is run through a fixed number of round-robin passes in which
//! declared ranks decide every synthetic match.

pub mod driver;
pub mod round_robin;

pub use driver::ConvergenceDriver;
pub use round_robin::{pair_count, run_pass};
