// Pure dashboard computations.
// No I/O and no shared state: every function here is a total function of its
// inputs, safe to call repeatedly or concurrently.

pub mod alerts;
pub mod merge;
pub mod ticks;
pub mod value_domain;

// Re-export key functions
pub use alerts::evaluate_alerts;
pub use merge::merge_series;
pub use ticks::day_aligned_ticks;
pub use value_domain::value_domain;
