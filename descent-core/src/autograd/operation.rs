use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::ops::activation::tanh::TanhBackward;
use crate::ops::arithmetic::add::AddBackward;
use crate::ops::arithmetic::div::DivBackward;
use crate::ops::arithmetic::mul::MulBackward;
use crate::ops::arithmetic::neg::NegBackward;
use crate::ops::arithmetic::pow::PowBackward;
use crate::ops::arithmetic::sub::SubBackward;
use crate::ops::math_elem::cos::CosBackward;
use crate::ops::math_elem::exp::ExpBackward;
use crate::ops::math_elem::ln::LnBackward;
use crate::ops::math_elem::sin::SinBackward;

/// Record of how a non-leaf [`Node`] was derived.
///
/// The operator set is fixed, so this is a closed sum type rather than a
/// trait object; each variant wraps the backward record of its op.
#[derive(Debug)]
pub enum Operation {
    Add(AddBackward),
    Sub(SubBackward),
    Mul(MulBackward),
    Div(DivBackward),
    Neg(NegBackward),
    Pow(PowBackward),
    Ln(LnBackward),
    Exp(ExpBackward),
    Sin(SinBackward),
    Cos(CosBackward),
    Tanh(TanhBackward),
}

macro_rules! dispatch {
    ($operation:expr, $op:ident => $body:expr) => {
        match $operation {
            Operation::Add($op) => $body,
            Operation::Sub($op) => $body,
            Operation::Mul($op) => $body,
            Operation::Div($op) => $body,
            Operation::Neg($op) => $body,
            Operation::Pow($op) => $body,
            Operation::Ln($op) => $body,
            Operation::Exp($op) => $body,
            Operation::Sin($op) => $body,
            Operation::Cos($op) => $body,
            Operation::Tanh($op) => $body,
        }
    };
}

impl Operation {
    /// Short name of the operation kind.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add(_) => "add",
            Operation::Sub(_) => "sub",
            Operation::Mul(_) => "mul",
            Operation::Div(_) => "div",
            Operation::Neg(_) => "neg",
            Operation::Pow(_) => "pow",
            Operation::Ln(_) => "ln",
            Operation::Exp(_) => "exp",
            Operation::Sin(_) => "sin",
            Operation::Cos(_) => "cos",
            Operation::Tanh(_) => "tanh",
        }
    }

    /// Ordered input nodes (one or two).
    pub fn inputs(&self) -> Vec<Node> {
        dispatch!(self, op => op.inputs())
    }

    /// Local gradients scaled by `grad_output`, one per input.
    pub fn input_grads(&self, grad_output: f64) -> Vec<f64> {
        dispatch!(self, op => op.backward(grad_output))
    }

    /// Pushes `grad_output` through the local derivative into each input's
    /// gradient accumulator. Inputs that do not require gradients are skipped.
    pub fn backward(&self, grad_output: f64) {
        let inputs = self.inputs();
        let grads = self.input_grads(grad_output);
        debug_assert_eq!(inputs.len(), grads.len());
        for (input, grad) in inputs.iter().zip(grads) {
            if input.requires_grad() {
                input.add_grad(grad);
            }
        }
    }

    pub(crate) fn into_inputs(self) -> Vec<Node> {
        dispatch!(self, op => op.into_inputs())
    }
}
