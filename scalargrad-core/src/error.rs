use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// All variants are detected eagerly, at graph construction time: forward
/// construction already has everything needed to validate its inputs, so
/// nothing is deferred to the backward pass. Note that reusing a graph
/// without zeroing gradients between backward passes is NOT an error value;
/// it surfaces only as incorrect numeric output (see `Value::backward`).
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid operand for operation '{operation}': {reason}")]
    InvalidOperand { operation: String, reason: String },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
