// Shared helpers for the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::buffer::Buffer;
use crate::device::{Context, StorageDevice};

/// Initializes `env_logger` once so `log` output shows up with `--nocapture`.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// CPU copy primitive that counts how often it was called.
#[derive(Debug, Default)]
pub(crate) struct CountingContext {
    copies: AtomicUsize,
}

impl CountingContext {
    pub(crate) fn copies(&self) -> usize {
        self.copies.load(Ordering::SeqCst)
    }
}

impl Context for CountingContext {
    fn device(&self) -> StorageDevice {
        StorageDevice::CPU
    }

    fn copy_buffer(&self, src: &Buffer) -> Buffer {
        self.copies.fetch_add(1, Ordering::SeqCst);
        src.clone()
    }
}

pub(crate) fn product(shape: &[usize]) -> usize {
    shape.iter().product()
}
