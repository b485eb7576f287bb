use num_traits::{One, Zero};

use crate::buffer::{Buffer, CpuBuffer};
use crate::tensor::Tensor;
use crate::types::DType;

fn filled_buffer(numel: usize, dtype: DType, one: bool) -> CpuBuffer {
    fn fill<T: Zero + One + Clone>(numel: usize, one: bool) -> Vec<T> {
        let value = if one { T::one() } else { T::zero() };
        vec![value; numel]
    }
    match dtype {
        DType::F32 => CpuBuffer::F32(fill(numel, one)),
        DType::F64 => CpuBuffer::F64(fill(numel, one)),
        DType::I32 => CpuBuffer::I32(fill(numel, one)),
        DType::I64 => CpuBuffer::I64(fill(numel, one)),
        DType::Bool => CpuBuffer::Bool(vec![one; numel]),
    }
}

/// Creates a tensor of the given shape and dtype filled with zeros (`false` for Bool).
pub fn zeros(shape: &[usize], dtype: DType) -> Tensor {
    let numel = shape.iter().product();
    Tensor {
        buffer: Buffer::Cpu(filled_buffer(numel, dtype, false)),
        shape: shape.to_vec(),
    }
}

/// Creates a tensor of the given shape and dtype filled with ones (`true` for Bool).
pub fn ones(shape: &[usize], dtype: DType) -> Tensor {
    let numel = shape.iter().product();
    Tensor {
        buffer: Buffer::Cpu(filled_buffer(numel, dtype, true)),
        shape: shape.to_vec(),
    }
}
