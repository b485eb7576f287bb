// axisops-core/src/ops/mod.rs

use std::fmt;
use std::str::FromStr;

use crate::error::{AxisOpsError, RuntimeError};
use crate::tensor::Tensor;

pub mod axes;
pub mod expand_dims;
pub mod squeeze;

pub use axes::{AxisSet, DimsConfig};
pub use expand_dims::{compute_expanded_shape, ExpandDimsOp};
pub use squeeze::{compute_squeezed_shape, SqueezeOp};

/// Output shape computation, without touching any buffer.
pub trait InferShape {
    fn infer_shape(&self, input_shape: &[usize]) -> Result<Vec<usize>, RuntimeError>;
}

/// A configured single-input, single-output operator.
///
/// Configuration is fixed at construction; invocations share no state, so one
/// instance may run concurrently on distinct input/output pairs.
pub trait Operator: InferShape + Send + Sync {
    /// Writes the result for `input` into the caller-owned `output` slot.
    ///
    /// `output` is write-only: its previous content is discarded. On error its
    /// content is unspecified and must not be used.
    fn run_into(&self, input: &Tensor, output: &mut Tensor) -> Result<(), RuntimeError>;

    /// Like [`Operator::run_into`], returning a fresh output tensor.
    fn run(&self, input: &Tensor) -> Result<Tensor, RuntimeError> {
        let mut output = Tensor::empty();
        self.run_into(input, &mut output)?;
        Ok(output)
    }
}

/// Operator type names as they appear in a graph definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    ExpandDims,
    Squeeze,
}

impl OpKind {
    pub fn name(&self) -> &'static str {
        match self {
            OpKind::ExpandDims => "ExpandDims",
            OpKind::Squeeze => "Squeeze",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OpKind {
    type Err = AxisOpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ExpandDims" => Ok(OpKind::ExpandDims),
            "Squeeze" => Ok(OpKind::Squeeze),
            other => Err(AxisOpsError::UnknownOperator(other.to_string())),
        }
    }
}

/// Builds the CPU operator registered under `op_type` with the given `dims`.
pub fn create_operator(
    op_type: &str,
    config: &DimsConfig,
) -> Result<Box<dyn Operator>, AxisOpsError> {
    let op: Box<dyn Operator> = match op_type.parse::<OpKind>()? {
        OpKind::ExpandDims => Box::new(ExpandDimsOp::new(config)?),
        OpKind::Squeeze => Box::new(SqueezeOp::new(config)?),
    };
    Ok(op)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
