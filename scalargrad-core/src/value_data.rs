// src/value_data.rs
use crate::value::Value; // Import Value for the operand links

/// Tag identifying the differentiable operation that produced a node.
///
/// Derived operations (negation, subtraction, division) are composed from
/// these primitives at construction time and never get a tag of their own,
/// so a graph only ever contains the five variants below. The constant
/// exponent of `Pow` travels inside the tag: together with the operand
/// values it is everything the backward dispatch needs, which is what lets
/// the engine avoid per-node heap-allocated closures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Binary addition.
    Add,
    /// Binary multiplication.
    Mul,
    /// Raise to a constant real exponent.
    Pow(f64),
    /// Natural exponential.
    Exp,
    /// Hyperbolic tangent.
    Tanh,
}

impl Op {
    /// Short printable symbol for the operation, as shown by the graph
    /// renderer.
    pub fn symbol(&self) -> String {
        match self {
            Op::Add => "+".to_string(),
            Op::Mul => "*".to_string(),
            Op::Pow(exponent) => format!("**{}", exponent),
            Op::Exp => "exp".to_string(),
            Op::Tanh => "tanh".to_string(),
        }
    }
}

/// Internal storage for one scalar node of the computation graph.
///
/// It is wrapped in `Rc<RefCell<ValueData>>` by the `Value` struct to allow
/// shared ownership and interior mutability. `data`, `op` and `operands`
/// are fixed at construction; only `grad` (during a backward pass) and
/// `label` ever mutate afterwards.
#[derive(Debug)]
pub struct ValueData {
    /// Result of the forward computation.
    pub data: f64,
    /// Accumulator for d(root)/d(this node). Starts at 0.0 and is only
    /// meaningful after a backward pass from some downstream root.
    pub grad: f64,
    /// Producing operation; `None` for leaf nodes.
    pub op: Option<Op>,
    /// Nodes consumed by the producing operation, in operand order; empty
    /// for leaves. Edges point result -> operand.
    pub operands: Vec<Value>,
    /// Optional cosmetic name, used by the graph renderer.
    pub label: Option<String>,
}

impl ValueData {
    pub(crate) fn new(
        data: f64,
        op: Option<Op>,
        operands: Vec<Value>,
        label: Option<String>,
    ) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
            label,
        }
    }
}
