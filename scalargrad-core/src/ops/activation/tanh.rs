// scalargrad-core/src/ops/activation/tanh.rs

use crate::value::Value;
use crate::value_data::Op;

// --- Forward Operation ---

/// Hyperbolic tangent, computed as `(e^{2x} - 1) / (e^{2x} + 1)` rather
/// than through `f64::tanh`, so forward values match the expression the
/// backward rule was derived from.
///
/// The backward rule is expressed in terms of the output:
/// d(tanh x)/dx = 1 - tanh(x)^2.
pub fn tanh_op(a: &Value) -> Value {
    let x = a.data();
    let e2x = (2.0 * x).exp();
    let t = (e2x - 1.0) / (e2x + 1.0);
    Value::from_op(t, Op::Tanh, vec![a.clone()])
}

impl Value {
    /// Method form of [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
