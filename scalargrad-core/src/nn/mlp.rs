use crate::error::ScalarGradError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use log::debug;

/// A multi-layer perceptron built by chaining fully connected tanh layers.
///
/// Layer `i` maps `sizes[i]` features to `sizes[i + 1]`, where `sizes` is
/// `in_features` followed by the requested layer sizes, so each layer's
/// output width feeds the next layer's input width.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP taking `in_features` inputs and producing
    /// `layer_sizes.last()` outputs.
    pub fn new(in_features: usize, layer_sizes: &[usize]) -> Self {
        let mut sizes = Vec::with_capacity(layer_sizes.len() + 1);
        sizes.push(in_features);
        sizes.extend_from_slice(layer_sizes);
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(pair[0], pair[1]))
            .collect();
        debug!("Mlp: built {} layer(s) from sizes {:?}", layer_sizes.len(), sizes);
        Mlp { layers }
    }

    /// Number of layers in the network.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        let mut current: Vec<Value> = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Value> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
