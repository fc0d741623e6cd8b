// src/node/mod.rs

use crate::autograd::Operation;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod autograd_methods;
mod math_methods;
mod traits;

/// Identity of a node inside a computation graph: the address of its shared cell.
///
/// Two distinct nodes holding equal values have different ids; clones of the
/// same `Node` share one id.
pub(crate) type NodeId = *const RefCell<NodeData>;

/// Internal state of a [`Node`].
#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) value: f64,
    /// Accumulated gradient of the last backward root with respect to this node.
    pub(crate) grad: f64,
    pub(crate) requires_grad: bool,
    /// The operation that produced this node. Always `None` for leaves.
    pub(crate) operation: Option<Rc<Operation>>,
}

/// A scalar value participating in a computation graph.
///
/// `Node` is a cheap handle over `Rc<RefCell<NodeData>>`:
/// 1.  **Shared Ownership:** the same node can feed any number of downstream
///     operations (`x * x`, then `y + x`), and stays alive as long as the
///     longest-lived consumer.
/// 2.  **Interior Mutability:** the gradient accumulator and the value can be
///     updated through a shared reference, which is what the backward pass and
///     the optimizers do.
///
/// The graph is single-threaded; `Node` is neither `Send` nor `Sync`.
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a leaf node that does not require gradients.
    pub fn new(value: f64) -> Self {
        Self::create(value, false)
    }

    /// Creates a leaf node.
    pub fn create(value: f64, requires_grad: bool) -> Self {
        Node {
            data: Rc::new(RefCell::new(NodeData {
                value,
                grad: 0.0,
                requires_grad,
                operation: None,
            })),
        }
    }

    /// Creates a trainable leaf node (`requires_grad = true`).
    pub fn parameter(value: f64) -> Self {
        Self::create(value, true)
    }

    /// Creates the result node of an operation.
    ///
    /// The node requires gradients exactly when an operation is attached.
    pub(crate) fn from_operation(value: f64, operation: Option<Operation>) -> Self {
        Node {
            data: Rc::new(RefCell::new(NodeData {
                value,
                grad: 0.0,
                requires_grad: operation.is_some(),
                operation: operation.map(Rc::new),
            })),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    pub(crate) fn id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Returns the current value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Checks if this node takes part in gradient computation.
    pub fn requires_grad(&self) -> bool {
        self.read_data().requires_grad
    }

    /// A leaf was created directly rather than produced by an operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().operation.is_none()
    }

    /// Overwrites the value in place.
    ///
    /// Gradients and the attached operation are untouched. Operations that
    /// already consumed this node keep the value they saw when they were built.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Returns `true` if both handles point at the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Drop for NodeData {
    /// Tears the graph down with an explicit work list.
    ///
    /// Dropping the head of a long chain would otherwise recurse once per node
    /// through `Rc` destructors and overflow the stack.
    fn drop(&mut self) {
        let mut pending: Vec<Rc<Operation>> = self.operation.take().into_iter().collect();
        while let Some(operation) = pending.pop() {
            let Ok(operation) = Rc::try_unwrap(operation) else {
                continue;
            };
            for input in operation.into_inputs() {
                if let Ok(cell) = Rc::try_unwrap(input.data) {
                    let mut data = cell.into_inner();
                    pending.extend(data.operation.take());
                }
            }
        }
    }
}
