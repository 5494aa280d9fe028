// src/graph.rs
use scalargrad_core::value::NodeId;
use scalargrad_core::Value;
use std::collections::HashSet;

/// Collects the full node set and operand -> consumer edge set reachable
/// from `root`.
///
/// Traversal is an iterative depth-first walk over operand references,
/// deduplicated by node identity, so shared subexpressions appear once.
/// Edges are deduplicated too: a node consumed twice by the same consumer
/// (e.g. `x * x`) contributes a single edge, matching how the renderer
/// wants to draw it.
pub fn trace(root: &Value) -> (Vec<Value>, Vec<(Value, Value)>) {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut seen_edges: HashSet<(NodeId, NodeId)> = HashSet::new();
    let mut nodes: Vec<Value> = Vec::new();
    let mut edges: Vec<(Value, Value)> = Vec::new();
    let mut stack: Vec<Value> = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.node_id()) {
            continue;
        }
        for operand in node.operands() {
            if seen_edges.insert((operand.node_id(), node.node_id())) {
                edges.push((operand.clone(), node.clone()));
            }
            if !visited.contains(&operand.node_id()) {
                stack.push(operand);
            }
        }
        nodes.push(node);
    }

    (nodes, edges)
}
