//! Axis insertion ("expand dims") and axis removal ("squeeze") operators.
//!
//! Both operators validate a fixed set of axis ids once, at construction, and
//! then map any number of input tensors to outputs carrying a new shape over a
//! copy of the same buffer.

pub mod buffer;
pub mod device;
pub mod error;
pub mod ops;
pub mod tensor;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use device::{Context, CpuContext, StorageDevice};
pub use error::{AxisOpsError, ConfigError, RuntimeError, TensorError};
pub use ops::{AxisSet, DimsConfig, ExpandDimsOp, InferShape, Operator, SqueezeOp};
pub use tensor::Tensor;
pub use types::DType;
