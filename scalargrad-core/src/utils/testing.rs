use crate::value::Value;

/// Checks that a node's forward value is within `tolerance` of `expected`.
/// Panics with the full actual/expected pair on mismatch.
pub fn check_value_near(actual: &Value, expected: f64, tolerance: f64) {
    let data = actual.data();
    let diff = (data - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            data, expected, diff, tolerance
        );
    }
}

/// Same check against a node's gradient accumulator.
pub fn check_grad_near(actual: &Value, expected: f64, tolerance: f64) {
    let grad = actual.grad();
    let diff = (grad - expected).abs();
    if diff > tolerance {
        panic!(
            "Gradient mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected, diff, tolerance
        );
    }
}
