use crate::node::Node;
use crate::ops::activation::tanh_op;
use crate::ops::arithmetic::pow_op;
use crate::ops::math_elem::{cos_op, exp_op, ln_op, sin_op};

impl Node {
    /// Raises `self` to the power `exponent`; both sides are differentiable.
    pub fn pow(&self, exponent: &Node) -> Node {
        pow_op(self, exponent)
    }

    /// Raises `self` to a constant power.
    pub fn powf(&self, exponent: f64) -> Node {
        pow_op(self, &Node::new(exponent))
    }

    /// Raises a constant `base` to the power `exponent`.
    pub fn scalar_pow(base: f64, exponent: &Node) -> Node {
        pow_op(&Node::new(base), exponent)
    }

    /// Natural logarithm.
    pub fn ln(&self) -> Node {
        ln_op(self)
    }

    /// Natural logarithm; same as [`Node::ln`].
    pub fn log(&self) -> Node {
        ln_op(self)
    }

    /// Logarithm of `self` in the given base, `ln(self) / ln(base)`.
    pub fn log_base(&self, base: &Node) -> Node {
        &ln_op(self) / &ln_op(base)
    }

    pub fn exp(&self) -> Node {
        exp_op(self)
    }

    pub fn sin(&self) -> Node {
        sin_op(self)
    }

    pub fn cos(&self) -> Node {
        cos_op(self)
    }

    pub fn tanh(&self) -> Node {
        tanh_op(self)
    }
}
