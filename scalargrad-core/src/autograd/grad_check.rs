// src/autograd/grad_check.rs
use crate::error::ScalarGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives freshly created leaf nodes on every evaluation, so no
/// gradient state leaks between the analytical pass and the perturbed
/// evaluations, and the caller never has to think about zeroing.
///
/// The comparison accepts a gradient when either the absolute difference or
/// the relative difference is within `tolerance`.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- 1. Analytical pass on a fresh graph ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // Evaluates `func` on another fresh graph with input `index` shifted.
    let eval_shifted = |index: usize, delta: f64| -> Result<f64, GradCheckError> {
        let perturbed: Vec<Value> = inputs
            .iter()
            .enumerate()
            .map(|(j, &x)| Value::new(if j == index { x + delta } else { x }))
            .collect();
        let shifted_output = func(&perturbed).map_err(GradCheckError::ForwardPassError)?;
        Ok(shifted_output.data())
    };

    // --- 2. Central difference per input ---
    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        if analytical_grad.is_nan() || analytical_grad.is_infinite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let loss_plus = eval_shifted(input_index, epsilon)?;
        let loss_minus = eval_shifted(input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if numerical_grad.is_nan() || numerical_grad.is_infinite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > tolerance && (difference / (analytical_grad.abs() + epsilon)) > tolerance {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}
