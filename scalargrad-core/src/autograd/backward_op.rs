// src/autograd/backward_op.rs
use crate::value::Value;
use crate::value_data::Op;

/// Applies one node's local derivative rule, adding the node's current
/// gradient (scaled by the local derivative) into each operand's
/// accumulator.
///
/// This single dispatch over [`Op`] is the engine's replacement for
/// per-node backward closures: the operand values, the node's own forward
/// value and the constant carried by `Pow` are everything the local rules
/// need. All contributions use `+=`, never `=`, because an operand may be
/// consumed by several downstream nodes.
pub(crate) fn propagate_to_operands(node: &Value) {
    let (op, out_data, out_grad, operands) = {
        let value_data = node.borrow_value_data();
        let op = match value_data.op {
            Some(op) => op,
            None => return, // leaf: nothing upstream to propagate to
        };
        (
            op,
            value_data.data,
            value_data.grad,
            value_data.operands.clone(),
        )
    };

    match op {
        Op::Add => {
            // d(a + b)/da = d(a + b)/db = 1
            operands[0].accumulate_grad(out_grad);
            operands[1].accumulate_grad(out_grad);
        }
        Op::Mul => {
            // d(a * b)/da = b, d(a * b)/db = a
            let a = operands[0].data();
            let b = operands[1].data();
            operands[0].accumulate_grad(b * out_grad);
            operands[1].accumulate_grad(a * out_grad);
        }
        Op::Pow(exponent) => {
            // d(a ** k)/da = k * a ** (k - 1)
            let base = operands[0].data();
            operands[0].accumulate_grad(exponent * base.powf(exponent - 1.0) * out_grad);
        }
        Op::Exp => {
            // d(e^a)/da = e^a, which is the forward result itself
            operands[0].accumulate_grad(out_data * out_grad);
        }
        Op::Tanh => {
            // d(tanh a)/da = 1 - tanh(a)^2, again in terms of the output
            operands[0].accumulate_grad((1.0 - out_data * out_data) * out_grad);
        }
    }
}
