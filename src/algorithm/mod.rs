//! Collapse engine: constraint sets, propagation, selection and the step loop

/// Bitset over palette variant indices
pub mod bitset;
/// Collapse step, main loop and pure generation entry points
pub mod executor;
/// Constraint propagation from decided neighbours
pub mod propagation;
/// Minimum-entropy selection and the injected random source
pub mod selection;
