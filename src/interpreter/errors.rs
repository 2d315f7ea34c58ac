//! Runtime error types for the Befunge interpreter
//!
//! Malformed programs never fail: underflow, blank cells, unknown opcodes and
//! zero divisors all have defined results. [`RuntimeError`] only covers limits
//! imposed by the host around the run.

use crate::memory::vector::Vector;
use std::fmt;

/// Errors that can end a run early
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The step budget ran out before the pointer reached `@`
    StepLimitExceeded { limit: u64, position: Vector },
}

impl RuntimeError {
    pub fn position(&self) -> Option<Vector> {
        match self {
            RuntimeError::StepLimitExceeded { position, .. } => Some(*position),
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuntimeError::StepLimitExceeded { limit, position } => {
                write!(
                    f,
                    "Step limit of {} exceeded without halting, pointer at {}",
                    limit, position
                )
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
