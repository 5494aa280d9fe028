// src/nn/mod.rs
// Module principal pour les couches de réseau de neurones.

pub mod layer;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
