// src/dot.rs
use crate::graph::trace;
use scalargrad_core::Value;
use std::fmt::Write;

/// Renders the graph reachable from `root` as Graphviz DOT text, laid out
/// left to right.
///
/// Every value becomes a record node showing its label, forward value and
/// gradient (filled lightyellow). Every non-leaf additionally gets a small
/// op node (filled lightblue) wired between its operands and itself, so
/// the operation is visible as its own box. No file is written and no
/// process spawned; the caller decides what to do with the text.
pub fn draw_dot(root: &Value) -> String {
    let (nodes, edges) = trace(root);
    let mut out = String::new();
    out.push_str("digraph {\n");
    out.push_str("    rankdir=\"LR\";\n");

    for node in &nodes {
        let uid = node.node_id() as usize;
        let label = node.label().unwrap_or_default();
        let _ = writeln!(
            out,
            "    \"{}\" [label=\"{} | data: {:.4} | grad: {:.4}\", shape=record, style=filled, fillcolor=lightyellow];",
            uid,
            label,
            node.data(),
            node.grad()
        );
        if let Some(op) = node.op() {
            // One op node per non-leaf, keyed by the value's uid so shared
            // operand nodes never collide.
            let _ = writeln!(
                out,
                "    \"{}{}\" [label=\"{}\", style=filled, fillcolor=lightblue];",
                uid,
                op.symbol(),
                op.symbol()
            );
            let _ = writeln!(out, "    \"{}{}\" -> \"{}\";", uid, op.symbol(), uid);
        }
    }

    for (operand, consumer) in &edges {
        // An edge always targets the consumer's op node; a consumer with
        // an operand is never a leaf.
        if let Some(op) = consumer.op() {
            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}{}\";",
                operand.node_id() as usize,
                consumer.node_id() as usize,
                op.symbol()
            );
        }
    }

    out.push_str("}\n");
    out
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_dot_contains_header_and_records() {
        let a = Value::with_label(2.0, "a");
        let b = Value::with_label(-3.0, "b");
        let product = &a * &b;
        product.set_label("prod");
        product.backward();

        let dot = draw_dot(&product);
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("rankdir=\"LR\""));
        assert!(dot.contains("a | data: 2.0000 | grad: -3.0000"));
        assert!(dot.contains("b | data: -3.0000 | grad: 2.0000"));
        assert!(dot.contains("prod | data: -6.0000 | grad: 1.0000"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_draw_dot_emits_op_node_and_edges() {
        let a = Value::new(1.0);
        let b = Value::new(2.0);
        let sum = &a + &b;

        let dot = draw_dot(&sum);
        let sum_uid = sum.node_id() as usize;
        // Op node, op -> result edge, and one operand -> op edge per input.
        assert!(dot.contains(&format!("\"{}+\" [label=\"+\"", sum_uid)));
        assert!(dot.contains(&format!("\"{}+\" -> \"{}\";", sum_uid, sum_uid)));
        assert!(dot.contains(&format!(
            "\"{}\" -> \"{}+\";",
            a.node_id() as usize,
            sum_uid
        )));
        assert!(dot.contains(&format!(
            "\"{}\" -> \"{}+\";",
            b.node_id() as usize,
            sum_uid
        )));
    }

    #[test]
    fn test_draw_dot_unlabelled_nodes_render_empty_label() {
        let a = Value::new(1.5);
        let dot = draw_dot(&a);
        assert!(dot.contains(" | data: 1.5000 | grad: 0.0000"));
    }

    #[test]
    fn test_draw_dot_pow_symbol_carries_exponent() {
        let a = Value::new(2.0);
        let squared = a.powf(2.0).expect("finite exponent");
        let dot = draw_dot(&squared);
        assert!(dot.contains("[label=\"**2\""));
    }
}
