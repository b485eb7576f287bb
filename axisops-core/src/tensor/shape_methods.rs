use crate::error::AxisOpsError;
use crate::ops::{DimsConfig, ExpandDimsOp, Operator, SqueezeOp};
use crate::tensor::Tensor;

/// One-shot shape methods. Each call validates `dims` and runs a CPU operator;
/// build an [`ExpandDimsOp`] / [`SqueezeOp`] once instead when the same `dims`
/// are applied to many tensors.
impl Tensor {
    /// Returns a copy of this tensor with size-1 axes inserted at `dims`.
    ///
    /// # Example
    /// ```
    /// use axisops_core::Tensor;
    ///
    /// let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
    /// let e = t.expand_dims(&[0]).unwrap();
    /// assert_eq!(e.shape(), &[1, 2, 3]);
    /// ```
    pub fn expand_dims(&self, dims: &[i64]) -> Result<Tensor, AxisOpsError> {
        let op = ExpandDimsOp::new(&DimsConfig::from(dims))?;
        Ok(op.run(self)?)
    }

    /// Returns a copy of this tensor with the size-1 axes at `dims` removed.
    ///
    /// # Example
    /// ```
    /// use axisops_core::Tensor;
    ///
    /// let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 1, 3]).unwrap();
    /// assert_eq!(t.squeeze_dims(&[1]).unwrap().shape(), &[2, 3]);
    /// assert!(t.squeeze_dims(&[0]).is_err());
    /// ```
    pub fn squeeze_dims(&self, dims: &[i64]) -> Result<Tensor, AxisOpsError> {
        let op = SqueezeOp::new(&DimsConfig::from(dims))?;
        Ok(op.run(self)?)
    }
}
