use log::debug;

use crate::device::{Context, CpuContext};
use crate::error::{ConfigError, RuntimeError};
use crate::ops::axes::{AxisSet, DimsConfig};
use crate::ops::{InferShape, Operator};
use crate::tensor::Tensor;

/// Returns `input_shape` with a size-1 axis inserted at every id of `axes`.
///
/// Ids refer to positions in the output shape: insertions happen in ascending
/// order on the growing shape.
///
/// # Errors
/// `RuntimeError::InsufficientRank` unless `rank + axes.len() > max(axes)`.
pub fn compute_expanded_shape(
    input_shape: &[usize],
    axes: &AxisSet,
) -> Result<Vec<usize>, RuntimeError> {
    let max_axis = match axes.max_axis() {
        Some(max_axis) => max_axis,
        None => return Ok(input_shape.to_vec()),
    };
    let rank = input_shape.len();
    let count = axes.len();
    // count <= max_axis + 1 holds for any strictly increasing set of ids.
    if rank + count < max_axis + 1 {
        return Err(RuntimeError::InsufficientRank {
            required: max_axis + 1 - count,
            actual: rank,
        });
    }

    let mut new_shape = Vec::with_capacity(rank + count);
    new_shape.extend_from_slice(input_shape);
    for axis in axes.iter() {
        new_shape.insert(axis, 1);
    }
    Ok(new_shape)
}

/// Inserts size-1 axes at fixed positions.
#[derive(Debug, Clone)]
pub struct ExpandDimsOp<C: Context = CpuContext> {
    axes: AxisSet,
    context: C,
}

impl ExpandDimsOp {
    pub fn new(config: &DimsConfig) -> Result<Self, ConfigError> {
        Self::with_context(config, CpuContext)
    }
}

impl<C: Context> ExpandDimsOp<C> {
    /// Validates `config` and binds the copy primitive used by `run`.
    pub fn with_context(config: &DimsConfig, context: C) -> Result<Self, ConfigError> {
        let axes = AxisSet::from_config(config)?;
        Ok(ExpandDimsOp { axes, context })
    }

    pub fn axes(&self) -> &AxisSet {
        &self.axes
    }

    pub fn context(&self) -> &C {
        &self.context
    }
}

impl<C: Context> InferShape for ExpandDimsOp<C> {
    fn infer_shape(&self, input_shape: &[usize]) -> Result<Vec<usize>, RuntimeError> {
        compute_expanded_shape(input_shape, &self.axes)
    }
}

impl<C: Context> Operator for ExpandDimsOp<C> {
    fn run_into(&self, input: &Tensor, output: &mut Tensor) -> Result<(), RuntimeError> {
        output.copy_from(input, &self.context);
        if self.axes.is_empty() {
            return Ok(());
        }
        let new_shape = self.infer_shape(input.shape())?;
        debug!(
            "ExpandDims: {:?} -> {:?} (dims {})",
            input.shape(),
            new_shape,
            self.axes
        );
        output.reshape(new_shape)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "expand_dims_test.rs"]
mod tests;
