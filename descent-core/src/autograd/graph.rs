use crate::node::{Node, NodeId};
use std::collections::HashSet;

/// Builds a topological ordering of the graph reachable from `root`.
///
/// The returned vector is in post-order: every node appears after all of its
/// inputs, and `root` is last. Each node appears exactly once, however many
/// paths lead to it. Identity is the node's shared cell, never its value.
///
/// Inputs are explored in the order the operation lists them. The traversal
/// uses an explicit stack so arbitrarily deep chains do not hit the recursion
/// limit.
pub(crate) fn topological_sort(root: &Node) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Node> = Vec::new();
    // (node, inputs_done)
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, inputs_done)) = stack.pop() {
        if inputs_done {
            sorted.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }

        let grad_fn = node.grad_fn();
        stack.push((node, true));
        if let Some(operation) = grad_fn {
            for input in operation.inputs().into_iter().rev() {
                if !visited.contains(&input.id()) {
                    stack.push((input, false));
                }
            }
        }
    }

    log::trace!("topological_sort: {} nodes reachable", sorted.len());
    sorted
}

/// Seeds `root` with `1.0` and runs the chain rule over its graph.
///
/// Derived nodes start every pass from zero, so only leaves carry gradients
/// over from earlier passes. Nodes are visited consumers first, so by the
/// time a node's operation runs its gradient holds the sum of all downstream
/// contributions of this pass.
pub(crate) fn backward(root: &Node) {
    let sorted = topological_sort(root);
    for node in sorted.iter().filter(|n| !n.is_leaf()) {
        node.zero_grad();
    }
    root.set_grad(1.0);
    for node in sorted.iter().rev() {
        let (operation, grad) = {
            let data = node.read_data();
            (data.operation.clone(), data.grad)
        };
        if let Some(operation) = operation {
            log::trace!("backward: {} with upstream grad {}", operation.name(), grad);
            operation.backward(grad);
        }
    }
}
