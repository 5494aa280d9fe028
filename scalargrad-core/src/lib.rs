// Déclare les modules principaux de la crate
pub mod autograd;
pub mod ops;
pub mod value;
pub mod value_data;

// Declare new top-level modules
pub mod nn;
pub mod utils;

// Ré-exporte le type Value pour qu'il soit accessible directement via `scalargrad_core::Value`
pub use value::Value;
pub use value_data::Op;

pub mod error;
pub use error::ScalarGradError;
