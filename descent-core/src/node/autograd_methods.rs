use crate::autograd::graph;
use crate::autograd::Operation;
use crate::node::Node;
use std::rc::Rc;

impl Node {
    /// Sets the `requires_grad` flag for this node.
    ///
    /// Only meaningful on leaves; a derived node keeps its attached operation
    /// either way.
    pub fn set_requires_grad(&self, requires_grad: bool) {
        let mut guard = self.write_data();
        if guard.operation.is_some() {
            log::warn!(
                "Setting requires_grad={} on a non-leaf node. Its gradient is still computed from the attached operation.",
                requires_grad
            );
        }
        guard.requires_grad = requires_grad;
    }

    /// Overwrites the gradient accumulator.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Resets the gradient accumulator to zero. The value is left alone.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Adds `grad` to the gradient accumulator.
    pub fn add_grad(&self, grad: f64) {
        self.write_data().grad += grad;
    }

    /// Returns the operation that produced this node, if any.
    pub fn grad_fn(&self) -> Option<Rc<Operation>> {
        self.read_data().operation.clone()
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node's gradient with `1.0` (d self / d self) and accumulates
    /// d self / d input into every reachable node that requires gradients.
    ///
    /// Leaf gradients are added, never overwritten: calling `backward` twice
    /// without `zero_grad` in between doubles every leaf gradient. This is
    /// what makes accumulation over several mini-batches possible. Derived
    /// nodes hold the gradient of the latest pass only.
    ///
    /// Calling `backward` on a node that does not require gradients is a no-op
    /// apart from seeding its own gradient.
    pub fn backward(&self) {
        graph::backward(self);
    }
}
