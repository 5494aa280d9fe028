use scalargrad_core::nn::{Mlp, Module, Neuron};
use scalargrad_core::{ScalarGradError, Value};

#[test]
fn test_mlp_end_to_end_backward() {
    let mlp = Mlp::new(3, &[4, 4, 1]);
    let inputs = vec![
        Value::with_label(2.0, "x1"),
        Value::with_label(3.0, "x2"),
        Value::with_label(-1.0, "x3"),
    ];

    let outputs = mlp.forward(&inputs).expect("matching dimension");
    assert_eq!(outputs.len(), 1);
    let out = &outputs[0];
    assert!(out.data() > -1.0 && out.data() < 1.0);

    out.backward();
    assert_eq!(out.grad(), 1.0);
    for param in mlp.parameters() {
        assert!(param.grad().is_finite());
    }
    // Inputs are leaves of the same graph and receive gradients too.
    for input in &inputs {
        assert!(input.grad().is_finite());
    }
}

#[test]
fn test_mlp_reuse_requires_manual_zeroing() {
    // Parameters persist across steps while the expression graph is
    // rebuilt fresh each time, as a training loop would do. Without
    // zero_grad the second pass accumulates on top of the first; with it,
    // gradients match a single fresh pass.
    let mlp = Mlp::new(2, &[1]);
    let inputs = vec![Value::new(0.5), Value::new(-0.25)];
    let params = mlp.parameters();
    let bias = params.last().expect("non-empty parameters");

    let out = mlp.forward(&inputs).expect("matching dimension")[0].clone();
    out.backward();
    let single_pass = bias.grad();

    let out = mlp.forward(&inputs).expect("matching dimension")[0].clone();
    out.backward();
    assert!((bias.grad() - 2.0 * single_pass).abs() < 1e-12);

    mlp.zero_grad();
    let out = mlp.forward(&inputs).expect("matching dimension")[0].clone();
    out.backward();
    assert!((bias.grad() - single_pass).abs() < 1e-12);
}

#[test]
fn test_dimension_mismatch_surfaces_from_first_layer() {
    let mlp = Mlp::new(4, &[2, 1]);
    let inputs = vec![Value::new(1.0), Value::new(2.0)];
    let err = mlp.forward(&inputs).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::DimensionMismatch {
            expected: 4,
            actual: 2
        }
    );
}

#[test]
fn test_parameters_are_enumerated_leaves() {
    let neuron = Neuron::new(5);
    let params = neuron.parameters();
    assert_eq!(params.len(), 6);
    for param in &params {
        assert!(param.is_leaf());
        assert!(param.operands().is_empty());
    }
}

#[test]
fn test_distinct_neurons_do_not_share_parameters() {
    let a = Neuron::new(2);
    let b = Neuron::new(2);
    for param_a in a.parameters() {
        for param_b in b.parameters() {
            assert!(!param_a.ptr_eq(&param_b));
        }
    }
}
