// src/node/traits.rs

use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

impl Clone for Node {
    /// Shallow clone: the new handle shares value, gradient and operation with
    /// the original.
    fn clone(&self) -> Self {
        Node {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Debug for Node {
    /// Does not descend into the inputs, so printing a node of a large graph
    /// stays cheap.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        f.debug_struct("Node")
            .field("value", &data.value)
            .field("grad", &data.grad)
            .field("requires_grad", &data.requires_grad)
            .field("grad_fn", &data.operation.as_ref().map(|op| op.name()))
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(f, "Node(value={}, grad={})", data.value, data.grad)
    }
}

// --- Arithmetic operators ---
//
// `&Node op &Node` is the primitive form. Owned nodes and `f64` operands on
// either side forward to it; a bare `f64` becomes a constant leaf that does not
// require gradients.

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Node> for &Node {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Node> for Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<&Node> for Node {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Node> for &Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<f64> for &Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, &Node::new(rhs))
            }
        }

        impl $trait<f64> for Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(&self, &Node::new(rhs))
            }
        }

        impl $trait<&Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(&Node::new(self), rhs)
            }
        }

        impl $trait<Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(&Node::new(self), &rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add_op);
impl_binary_operator!(Sub, sub, sub_op);
impl_binary_operator!(Mul, mul, mul_op);
impl_binary_operator!(Div, div, div_op);

impl Neg for &Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl Neg for Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(&self)
    }
}
