use crate::error::ScalarGradError;
use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers,
/// containers).
///
/// Modules compose scalar nodes into larger expressions purely through the
/// engine's forward operations; they never mutate a node's value,
/// operation or operands directly. Everything a module learns lives in the
/// leaf nodes it created at construction time, which `parameters` must
/// enumerate exhaustively (including those of sub-modules).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass of the module.
    ///
    /// # Arguments
    /// * `inputs`: the input nodes for the module.
    ///
    /// # Returns
    /// A `Result` containing the output nodes, or a `ScalarGradError` if
    /// the inputs do not match the module's expected dimension.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns every trainable parameter (leaf node) of the module.
    fn parameters(&self) -> Vec<Value>;

    /// Resets the gradient accumulator of every parameter to 0.0.
    ///
    /// Backward passes accumulate rather than overwrite, so this must be
    /// called between passes when the same parameters are reused across
    /// training steps.
    fn zero_grad(&self) {
        for parameter in self.parameters() {
            parameter.zero_grad();
        }
    }
}
