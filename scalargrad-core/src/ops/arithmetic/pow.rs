// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::value::Value;
use crate::value_data::Op;

// --- Forward Operation ---

/// Builds the `Pow` node without validating the exponent. Internal callers
/// (division) pass fixed finite constants.
pub(crate) fn pow_node(a: &Value, exponent: f64) -> Value {
    Value::from_op(
        a.data().powf(exponent),
        Op::Pow(exponent),
        vec![a.clone()],
    )
}

/// Raises `a` to a constant real exponent.
///
/// The exponent is a plain number, never a node: differentiating `x ** y`
/// for node-valued `y` needs a logarithm rule this engine does not provide,
/// so the restriction is part of the operation's contract. A NaN or
/// infinite exponent is rejected eagerly, at construction time, with
/// [`ScalarGradError::InvalidOperand`]. Non-finite *operand* values are
/// left to ordinary IEEE propagation.
pub fn pow_op(a: &Value, exponent: f64) -> Result<Value, ScalarGradError> {
    if exponent.is_nan() || exponent.is_infinite() {
        return Err(ScalarGradError::InvalidOperand {
            operation: "pow".to_string(),
            reason: format!("exponent must be a finite real constant, got {}", exponent),
        });
    }
    Ok(pow_node(a, exponent))
}

impl Value {
    /// Method form of [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
