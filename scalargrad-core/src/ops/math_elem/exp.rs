// scalargrad-core/src/ops/math_elem/exp.rs

use crate::value::Value;
use crate::value_data::Op;

// --- Forward Operation ---

/// Natural exponential.
///
/// The backward rule reuses the forward result: d(e^x)/dx = e^x, so the
/// dispatch reads the output node's own value instead of recomputing.
pub fn exp_op(a: &Value) -> Value {
    Value::from_op(a.data().exp(), Op::Exp, vec![a.clone()])
}

impl Value {
    /// Method form of [`exp_op`].
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
