//! # Exemple d'un MLP Scalaire avec Passe Arrière
//!
//! Cet exemple illustre les étapes fondamentales de l'utilisation de
//! `scalargrad-core` :
//! 1. **Définition d'un réseau** (`Mlp`) : couches tanh entièrement
//!    connectées, construites à partir de noeuds scalaires.
//! 2. **Passe avant** : construction dynamique du graphe de calcul.
//! 3. **Passe arrière** (`backward`) : calcul des gradients de la sortie
//!    par rapport à chaque paramètre et chaque entrée.
//! 4. **Mécanisme `zero_grad`** : remise à zéro manuelle des gradients
//!    avant une nouvelle passe (les gradients s'accumulent sinon).
//!
//! ## Exécution
//! `cargo run --example basic_mlp`

use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    // Un petit réseau 3 -> 4 -> 4 -> 1
    let mlp = Mlp::new(3, &[4, 4, 1]);
    println!(
        "MLP with {} layer(s) and {} parameter(s)",
        mlp.num_layers(),
        mlp.parameters().len()
    );

    let inputs = vec![
        Value::with_label(2.0, "x1"),
        Value::with_label(3.0, "x2"),
        Value::with_label(-1.0, "x3"),
    ];

    // Passe avant : la sortie est un noeud scalaire dans (-1, 1).
    let outputs = mlp.forward(&inputs)?;
    let out = &outputs[0];
    println!("forward: {}", out);

    // Passe arrière depuis la sortie.
    out.backward();
    for (index, input) in inputs.iter().enumerate() {
        println!("d(out)/d(x{}) = {:.6}", index + 1, input.grad());
    }

    let params = mlp.parameters();
    println!("first weight grad  = {:.6}", params[0].grad());
    if let Some(last) = params.last() {
        println!("output bias grad   = {:.6}", last.grad());
    }

    // Les gradients s'accumulent d'une passe à l'autre : remise à zéro
    // explicite avant de réutiliser le réseau.
    mlp.zero_grad();
    println!("after zero_grad: first weight grad = {:.6}", params[0].grad());

    Ok(())
}
