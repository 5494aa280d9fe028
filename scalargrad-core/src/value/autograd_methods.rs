// src/value/autograd_methods.rs
use crate::autograd::backward_op::propagate_to_operands;
use crate::autograd::graph::topological_sort;
use crate::value::Value;
use log::debug;

impl Value {
    /// Computes d(self)/d(node) for every node reachable from `self`
    /// through operand references.
    ///
    /// The pass builds a post-order topological sort of the dependency
    /// graph, seeds `self`'s gradient with 1.0, then walks the order in
    /// reverse (root first, leaves last). A node therefore fires its local
    /// derivative rule only after every downstream consumer has already
    /// added its contribution, which is what makes the multivariate chain
    /// rule sum correctly across shared subexpressions.
    ///
    /// Gradients are never reset implicitly: calling `backward` again on a
    /// graph whose nodes still carry gradients from a previous pass
    /// accumulates into those stale values. Callers reusing nodes across
    /// passes must first call [`Value::zero_grad`] on every node they care
    /// about (`Module::zero_grad` does this for parameters).
    ///
    /// A leaf root simply gets `grad = 1.0` and propagates nothing.
    pub fn backward(&self) {
        let order = topological_sort(self);
        debug!("backward: propagating through {} node(s)", order.len());
        self.borrow_value_data_mut().grad = 1.0;
        for node in order.iter().rev() {
            propagate_to_operands(node);
        }
    }

    /// Resets this node's gradient accumulator to 0.0.
    ///
    /// Only this node is touched; resetting a whole graph means calling
    /// this on every node of interest.
    pub fn zero_grad(&self) {
        self.borrow_value_data_mut().grad = 0.0;
    }

    /// Adds `contribution` into this node's gradient accumulator.
    ///
    /// Contributions add rather than overwrite: a node may be consumed by
    /// several downstream nodes, and each path supplies its own term.
    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.borrow_value_data_mut().grad += contribution;
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
