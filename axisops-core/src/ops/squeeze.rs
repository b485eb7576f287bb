use log::debug;

use crate::device::{Context, CpuContext};
use crate::error::{ConfigError, RuntimeError};
use crate::ops::axes::{AxisSet, DimsConfig};
use crate::ops::{InferShape, Operator};
use crate::tensor::Tensor;

/// Returns `input_shape` without the axes listed in `axes`.
///
/// Walks the input axes and the sorted ids together in a single pass; every
/// removed axis must have size 1.
///
/// # Errors
/// * `RuntimeError::InsufficientRank` if `max(axes) >= rank`.
/// * `RuntimeError::NonUnitDimension` for the first targeted axis whose size is not 1.
pub fn compute_squeezed_shape(
    input_shape: &[usize],
    axes: &AxisSet,
) -> Result<Vec<usize>, RuntimeError> {
    let rank = input_shape.len();
    if let Some(max_axis) = axes.max_axis() {
        if rank <= max_axis {
            return Err(RuntimeError::InsufficientRank {
                required: max_axis + 1,
                actual: rank,
            });
        }
    }

    let targets = axes.as_slice();
    let mut j = 0;
    let mut new_shape = Vec::with_capacity(rank.saturating_sub(targets.len()));
    for (i, &size) in input_shape.iter().enumerate() {
        if j < targets.len() && targets[j] == i {
            if size != 1 {
                return Err(RuntimeError::NonUnitDimension { axis: i, size });
            }
            j += 1;
            continue;
        }
        new_shape.push(size);
    }
    Ok(new_shape)
}

/// Removes size-1 axes at fixed positions.
#[derive(Debug, Clone)]
pub struct SqueezeOp<C: Context = CpuContext> {
    axes: AxisSet,
    context: C,
}

impl SqueezeOp {
    pub fn new(config: &DimsConfig) -> Result<Self, ConfigError> {
        Self::with_context(config, CpuContext)
    }
}

impl<C: Context> SqueezeOp<C> {
    pub fn with_context(config: &DimsConfig, context: C) -> Result<Self, ConfigError> {
        let axes = AxisSet::from_config(config)?;
        Ok(SqueezeOp { axes, context })
    }

    pub fn axes(&self) -> &AxisSet {
        &self.axes
    }

    pub fn context(&self) -> &C {
        &self.context
    }
}

impl<C: Context> InferShape for SqueezeOp<C> {
    fn infer_shape(&self, input_shape: &[usize]) -> Result<Vec<usize>, RuntimeError> {
        compute_squeezed_shape(input_shape, &self.axes)
    }
}

impl<C: Context> Operator for SqueezeOp<C> {
    fn run_into(&self, input: &Tensor, output: &mut Tensor) -> Result<(), RuntimeError> {
        output.copy_from(input, &self.context);
        let new_shape = self.infer_shape(input.shape())?;
        debug!(
            "Squeeze: {:?} -> {:?} (dims {})",
            input.shape(),
            new_shape,
            self.axes
        );
        output.reshape(new_shape)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "squeeze_test.rs"]
mod tests;
