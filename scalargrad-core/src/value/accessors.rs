// src/value/accessors.rs
use crate::value::{NodeId, Value};
use crate::value_data::Op;
use std::rc::Rc;

impl Value {
    /// Returns the forward value of this node.
    pub fn data(&self) -> f64 {
        self.borrow_value_data().data
    }

    /// Returns the current gradient accumulator.
    ///
    /// Meaningful only after a backward pass from some downstream root;
    /// before that it reflects its initialization (0.0) or a previous,
    /// unrelated backward pass.
    pub fn grad(&self) -> f64 {
        self.borrow_value_data().grad
    }

    /// Returns the producing operation tag, `None` for a leaf.
    pub fn op(&self) -> Option<Op> {
        self.borrow_value_data().op
    }

    /// Returns `true` when this node is a leaf (an input or parameter).
    pub fn is_leaf(&self) -> bool {
        self.borrow_value_data().op.is_none()
    }

    /// Returns the optional cosmetic label.
    pub fn label(&self) -> Option<String> {
        self.borrow_value_data().label.clone()
    }

    /// Sets the cosmetic label. Purely informational; the renderer shows it.
    pub fn set_label(&self, label: impl Into<String>) {
        self.borrow_value_data_mut().label = Some(label.into());
    }

    /// Returns handles to the direct operands of this node (empty for a
    /// leaf), in the order the producing operation consumed them.
    pub fn operands(&self) -> Vec<Value> {
        self.borrow_value_data().operands.clone()
    }

    /// Returns the stable identity of the underlying node.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.inner)
    }

    /// Returns `true` when the two handles designate the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
