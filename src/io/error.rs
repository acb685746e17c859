//! Error types and context management for generation runs

use std::fmt;

use crate::spatial::grid::Position;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// A cell selected for collapse has no allowed variant left
    ///
    /// Occurs when decided neighbours impose incompatible connector codes on
    /// the same cell. There is no backtracking, so the run is abandoned.
    Contradiction {
        /// Cell that could not be collapsed
        position: Position,
        /// Collapse step when this occurred
        iteration: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Variant index exceeds the palette
    InvalidVariantIndex {
        /// The invalid variant index
        index: usize,
        /// Number of variants in the palette
        palette_size: usize,
    },

    /// Writing rendered output failed
    Output {
        /// Description of the write that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The engine was driven into a state it cannot act on
    Computation {
        /// Name of the operation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction {
                position,
                iteration,
            } => {
                write!(
                    f,
                    "Contradiction at cell {position} during iteration {iteration}: no tile variant fits its neighbours"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidVariantIndex {
                index,
                palette_size,
            } => {
                write!(
                    f,
                    "Variant index {index} is out of bounds (palette size: {palette_size})"
                )
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Current collapse step
    pub iteration: Option<usize>,
    /// Grid position where the error occurred
    pub position: Option<Position>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with engine state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                AlgorithmError::Contradiction {
                    iteration,
                    position,
                } => {
                    if let Some(iter) = context.iteration {
                        *iteration = iter;
                    }
                    if let Some(pos) = context.position {
                        *position = pos;
                    }
                }
                AlgorithmError::Output { operation, .. }
                | AlgorithmError::Computation { operation, .. } => {
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                AlgorithmError::InvalidParameter { .. }
                | AlgorithmError::InvalidVariantIndex { .. } => {}
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            operation: Some(operation),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
