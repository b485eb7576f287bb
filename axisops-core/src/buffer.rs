use crate::device::StorageDevice;
use crate::types::DType;

/// Enum representing different buffer types based on device.
/// This allows `Tensor` to hold different kinds of data buffers.
#[derive(Debug, Clone, PartialEq)]
pub enum Buffer {
    /// Data resides on the CPU.
    Cpu(CpuBuffer),
}

/// Enum for CPU-specific buffer types, one variant per `DType`.
#[derive(Debug, Clone, PartialEq)]
pub enum CpuBuffer {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    Bool(Vec<bool>),
}

impl CpuBuffer {
    pub fn len(&self) -> usize {
        match self {
            CpuBuffer::F32(v) => v.len(),
            CpuBuffer::F64(v) => v.len(),
            CpuBuffer::I32(v) => v.len(),
            CpuBuffer::I64(v) => v.len(),
            CpuBuffer::Bool(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            CpuBuffer::F32(_) => DType::F32,
            CpuBuffer::F64(_) => DType::F64,
            CpuBuffer::I32(_) => DType::I32,
            CpuBuffer::I64(_) => DType::I64,
            CpuBuffer::Bool(_) => DType::Bool,
        }
    }
}

impl Buffer {
    /// Returns the number of elements in the buffer.
    pub fn len(&self) -> usize {
        match self {
            Buffer::Cpu(cpu) => cpu.len(),
        }
    }

    /// Returns true if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            Buffer::Cpu(cpu) => cpu.dtype(),
        }
    }

    pub fn device(&self) -> StorageDevice {
        match self {
            Buffer::Cpu(_) => StorageDevice::CPU,
        }
    }

    /// Attempts to get a reference to the underlying data if this is a CPU F32 buffer.
    pub fn try_get_cpu_f32(&self) -> Option<&[f32]> {
        match self {
            Buffer::Cpu(CpuBuffer::F32(data)) => Some(data),
            _ => None,
        }
    }

    pub fn try_get_cpu_f64(&self) -> Option<&[f64]> {
        match self {
            Buffer::Cpu(CpuBuffer::F64(data)) => Some(data),
            _ => None,
        }
    }

    pub fn try_get_cpu_i64(&self) -> Option<&[i64]> {
        match self {
            Buffer::Cpu(CpuBuffer::I64(data)) => Some(data),
            _ => None,
        }
    }
}
