use crate::error::ScalarGradError;
use crate::nn::module::Module;
use crate::value::Value;
use log::trace;
use rand::Rng;

/// A single tanh neuron: `tanh(sum(w_i * x_i) + b)`.
///
/// Weights and bias are leaf nodes drawn uniformly from [-1, 1) at
/// construction. They are the neuron's trainable parameters; the
/// activation expression is rebuilt from them on every forward call.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
}

impl Neuron {
    /// Creates a neuron taking `in_features` inputs.
    pub fn new(in_features: usize) -> Self {
        let mut rng = rand::thread_rng();
        let weights = (0..in_features)
            .map(|_| Value::new(rng.gen_range(-1.0..1.0)))
            .collect();
        let bias = Value::new(rng.gen_range(-1.0..1.0));
        Neuron { weights, bias }
    }

    /// Number of inputs this neuron expects.
    pub fn in_features(&self) -> usize {
        self.weights.len()
    }

    /// Builds the activation expression `tanh(sum(w_i * x_i) + b)` over
    /// `inputs`.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] when `inputs` does
    /// not have exactly `in_features` elements. The check runs before any
    /// node is created, so a failed call leaves no partial graph behind.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        trace!("Neuron: activating on {} input(s)", inputs.len());
        let mut activation = self.bias.clone();
        for (weight, input) in self.weights.iter().zip(inputs.iter()) {
            activation = &activation + &(weight * input);
        }
        Ok(activation.tanh())
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<Value> {
        let mut params = Vec::with_capacity(self.weights.len() + 1);
        params.extend(self.weights.iter().cloned());
        params.push(self.bias.clone());
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
