use scalargrad_core::autograd::check_grad;
use scalargrad_core::ScalarGradError;

mod common;
use common::leaf;

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-4;

#[test]
fn test_finite_differences_pure_sum() {
    check_grad(
        |leaves| Ok(&leaves[0] + &leaves[1]),
        &[2.0, -3.0],
        EPSILON,
        TOLERANCE,
    )
    .expect("sum should pass gradient check");
}

#[test]
fn test_finite_differences_pure_product() {
    check_grad(
        |leaves| Ok(&leaves[0] * &leaves[1]),
        &[2.0, -3.0],
        EPSILON,
        TOLERANCE,
    )
    .expect("product should pass gradient check");
}

#[test]
fn test_finite_differences_tanh_chain() {
    check_grad(
        |leaves| Ok((&(&leaves[0] * &leaves[1]) + &leaves[2]).tanh()),
        &[0.7, -1.2, 0.3],
        EPSILON,
        TOLERANCE,
    )
    .expect("tanh chain should pass gradient check");
}

#[test]
fn test_finite_differences_leaf_reused_in_two_branches() {
    check_grad(
        |leaves| Ok(&(&leaves[0] * &leaves[1]) + &leaves[0].tanh()),
        &[0.4, 1.5],
        EPSILON,
        TOLERANCE,
    )
    .expect("shared-leaf expression should pass gradient check");
}

#[test]
fn test_finite_differences_worked_example() {
    check_grad(
        |leaves| {
            let e = &leaves[0] * &leaves[1];
            let d = &e + &leaves[2];
            Ok(&d * &leaves[3])
        },
        &[2.0, -3.0, 10.0, -2.0],
        EPSILON,
        TOLERANCE,
    )
    .expect("worked example should pass gradient check");
}

#[test]
fn test_finite_differences_exp_div_pow_mix() {
    check_grad(
        |leaves| {
            let numerator = &leaves[0].exp() + 1.0;
            let denominator = leaves[1].powf(2.0)?;
            Ok(&numerator / &denominator)
        },
        &[0.3, 1.7],
        EPSILON,
        TOLERANCE,
    )
    .expect("mixed expression should pass gradient check");
}

#[test]
fn test_forward_errors_surface_through_check() {
    let result = check_grad(
        |leaves| {
            leaves[0].powf(f64::INFINITY)?;
            Ok(leaves[0].clone())
        },
        &[2.0],
        EPSILON,
        TOLERANCE,
    );
    assert!(result.is_err());
}

#[test]
fn test_pow_rejects_non_constant_exponent_eagerly() {
    // The failure happens at construction, before any backward machinery.
    let x = leaf(2.0, "x");
    let err = x.powf(f64::NAN).unwrap_err();
    assert!(matches!(err, ScalarGradError::InvalidOperand { .. }));
    // The failed construction left no node behind: x is still a loose leaf.
    assert!(x.is_leaf());
    assert_eq!(x.grad(), 0.0);
}
