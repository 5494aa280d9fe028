//! # Exemple de Rendu DOT d'un Graphe de Calcul
//!
//! Construit la petite expression `L = (a * b + c) * f`, lance la passe
//! arrière, puis imprime le graphe au format Graphviz DOT sur stdout.
//!
//! ## Exécution
//! `cargo run --example draw_expression | dot -Tsvg > graph.svg`

use scalargrad_core::Value;
use scalargrad_viz::draw_dot;

fn main() {
    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");
    let e = &a * &b;
    e.set_label("e");
    let d = &e + &c;
    d.set_label("d");
    let f = Value::with_label(-2.0, "f");
    let loss = &d * &f;
    loss.set_label("L");

    loss.backward();

    println!("{}", draw_dot(&loss));
}
