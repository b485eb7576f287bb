use std::fmt::Debug;

use crate::buffer::Buffer;

/// Represents the physical location where tensor data is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageDevice {
    /// Data is stored in main system memory (RAM).
    /// This is the default device.
    #[default]
    CPU,
}

/// Device-specific copy primitive injected into the operators.
///
/// `copy_buffer` must return a full, independent duplicate of `src` and must
/// have completed by the time it returns.
pub trait Context: Debug + Send + Sync {
    /// The device this context copies on.
    fn device(&self) -> StorageDevice;

    fn copy_buffer(&self, src: &Buffer) -> Buffer;
}

/// Synchronous copy on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuContext;

impl Context for CpuContext {
    fn device(&self) -> StorageDevice {
        StorageDevice::CPU
    }

    fn copy_buffer(&self, src: &Buffer) -> Buffer {
        src.clone()
    }
}
