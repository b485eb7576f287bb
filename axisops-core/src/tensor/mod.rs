// src/tensor/mod.rs

use crate::buffer::{Buffer, CpuBuffer};
use crate::device::{Context, StorageDevice};
use crate::error::TensorError;
use crate::types::DType;

pub mod create;
mod shape_methods;

pub use create::{ones, zeros};

/// Represents a multi-dimensional array (tensor): a flat buffer plus a shape.
///
/// A `Tensor` owns its buffer. Copies made through [`Tensor::copy_from`] are
/// deep, so an operator's output never aliases its input.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    pub(crate) buffer: Buffer,
    pub(crate) shape: Vec<usize>,
}

impl Default for Tensor {
    fn default() -> Self {
        Tensor::empty()
    }
}

impl Tensor {
    /// Creates a new Tensor with the given f32 data and shape on the CPU.
    ///
    /// # Errors
    /// Returns `TensorError::TensorCreationError` if the length of `data_vec`
    /// does not match the number of elements described by `shape`.
    pub fn new(data_vec: Vec<f32>, shape: Vec<usize>) -> Result<Self, TensorError> {
        Self::from_cpu_buffer(CpuBuffer::F32(data_vec), shape)
    }

    pub fn new_f64(data_vec: Vec<f64>, shape: Vec<usize>) -> Result<Self, TensorError> {
        Self::from_cpu_buffer(CpuBuffer::F64(data_vec), shape)
    }

    pub fn new_i32(data_vec: Vec<i32>, shape: Vec<usize>) -> Result<Self, TensorError> {
        Self::from_cpu_buffer(CpuBuffer::I32(data_vec), shape)
    }

    pub fn new_i64(data_vec: Vec<i64>, shape: Vec<usize>) -> Result<Self, TensorError> {
        Self::from_cpu_buffer(CpuBuffer::I64(data_vec), shape)
    }

    pub fn new_bool(data_vec: Vec<bool>, shape: Vec<usize>) -> Result<Self, TensorError> {
        Self::from_cpu_buffer(CpuBuffer::Bool(data_vec), shape)
    }

    /// Wraps an existing CPU buffer, checking its length against `shape`.
    pub fn from_cpu_buffer(buffer: CpuBuffer, shape: Vec<usize>) -> Result<Self, TensorError> {
        let numel: usize = shape.iter().product();
        let data_len = buffer.len();
        if data_len != numel {
            return Err(TensorError::TensorCreationError { data_len, shape });
        }
        Ok(Tensor {
            buffer: Buffer::Cpu(buffer),
            shape,
        })
    }

    /// An empty f32 tensor of shape `[0]`, used as a fresh output slot.
    pub fn empty() -> Self {
        Tensor {
            buffer: Buffer::Cpu(CpuBuffer::F32(Vec::new())),
            shape: vec![0],
        }
    }

    /// Returns the tensor's shape (dimensions).
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn dtype(&self) -> DType {
        self.buffer.dtype()
    }

    pub fn device(&self) -> StorageDevice {
        self.buffer.device()
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Returns the flat f32 data, or `None` if the tensor is not F32.
    pub fn get_f32_data(&self) -> Option<&[f32]> {
        self.buffer.try_get_cpu_f32()
    }

    pub fn get_f64_data(&self) -> Option<&[f64]> {
        self.buffer.try_get_cpu_f64()
    }

    pub fn get_i64_data(&self) -> Option<&[i64]> {
        self.buffer.try_get_cpu_i64()
    }

    /// Replaces this tensor's content and shape with a deep copy of `src`,
    /// using the copy primitive of `ctx`. Whatever `self` held before is dropped.
    pub fn copy_from<C: Context + ?Sized>(&mut self, src: &Tensor, ctx: &C) {
        self.buffer = ctx.copy_buffer(&src.buffer);
        self.shape.clone_from(&src.shape);
    }

    /// Replaces the shape metadata without touching the buffer.
    ///
    /// # Errors
    /// `TensorError::ElementCountMismatch` if `new_shape` does not describe the
    /// same number of elements as the current shape. The tensor is left unchanged.
    pub fn reshape(&mut self, new_shape: Vec<usize>) -> Result<(), TensorError> {
        let new_numel: usize = new_shape.iter().product();
        if new_numel != self.numel() {
            return Err(TensorError::ElementCountMismatch {
                from: self.shape.clone(),
                to: new_shape,
            });
        }
        self.shape = new_shape;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tensor_test.rs"]
mod tests;
