use super::*;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward() {
    let a = Value::new(1.0);
    let result = exp_op(&a);
    assert_relative_eq!(result.data(), std::f64::consts::E, epsilon = 1e-12);
    assert_eq!(result.op(), Some(Op::Exp));
}

#[test]
fn test_exp_backward_reuses_output() {
    let a = Value::new(2.0);
    let result = a.exp();
    result.backward();
    // d(e^x)/dx at x = 2 is e^2, the forward value itself.
    assert_relative_eq!(a.grad(), result.data(), epsilon = 1e-12);
}

#[test]
fn test_exp_of_zero() {
    let a = Value::new(0.0);
    let result = a.exp();
    assert_relative_eq!(result.data(), 1.0);
    result.backward();
    assert_relative_eq!(a.grad(), 1.0);
}
