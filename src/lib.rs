//! Pipe pattern generation with a simplified wave function collapse
//!
//! A fixed palette of connector tiles is laid out on a rectangular grid so
//! that every pair of touching sides carries the same connector code. Each
//! step propagates constraints from decided cells, picks a lowest-entropy
//! undecided cell and collapses it to a random allowed tile.

#![forbid(unsafe_code)]

/// Propagation, selection and the collapse loop
pub mod algorithm;
/// Command-line driver, rendering, logging and error handling
pub mod io;
/// Palette and grid data structures
pub mod spatial;

pub use algorithm::executor::{CollapseExecutor, RunState, generate_pattern, run_collapse};
pub use algorithm::selection::RandomSelector;
pub use io::error::{AlgorithmError, Result};
pub use spatial::{Grid, Palette};
