//! The shared stack instance.

use crate::{
    adapters::sync::Mutex,
    domain::{Capacity, Element, Stack, StackConfig, StackError},
    infrastructure::streaming::StackStream,
};
use core::fmt;

/// Snapshot of the stack's fill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackState {
    /// Number of stored elements.
    pub len: usize,
    /// Number of slots.
    pub capacity: Capacity,
}

impl fmt::Display for StackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.len, self.capacity.slots())
    }
}

/// A stack engine shared by every caller through one exclusive lock.
///
/// Each element operation ([`push`](Self::push), [`pop`](Self::pop)) and each
/// [`set_capacity`](Self::set_capacity) holds the lock for its own duration
/// and releases it before returning. Nothing holds the lock across more than
/// one element, so longer transfers issued through [`StackStream`] interleave
/// with other callers at element granularity.
///
/// The device is an ordinary owned value: construct it once, share it by
/// reference (or `Arc`), and drop it to release the buffer.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use stackdev::{StackConfig, StackDevice};
///
/// let device = Arc::new(StackDevice::new(StackConfig::default())?);
///
/// let worker = Arc::clone(&device);
/// tokio::spawn(async move {
///     worker.push(7).await.ok();
/// });
/// ```
pub struct StackDevice {
    stack: Mutex<Stack>,
}

impl StackDevice {
    /// Create a device with an empty stack.
    ///
    /// # Errors
    ///
    /// Returns `OutOfMemory` if the initial buffer cannot be allocated.
    pub fn new(config: StackConfig) -> Result<Self, StackError> {
        let stack = Stack::new(config)?;
        info!("stack device ready with {} slots", config.capacity().slots());
        Ok(Self {
            stack: Mutex::new(stack),
        })
    }

    /// Open a stream handle onto this device.
    ///
    /// Handles carry no state of their own; opening and dropping one has no
    /// effect on the stack.
    pub fn open(&self) -> StackStream<'_> {
        StackStream::new(self)
    }

    /// Push one element under the lock.
    pub async fn push(&self, value: Element) -> Result<(), StackError> {
        self.stack.lock().await.push(value)
    }

    /// Pop one element under the lock.
    pub async fn pop(&self) -> Result<Element, StackError> {
        self.stack.lock().await.pop()
    }

    /// Change the capacity under the lock.
    ///
    /// No push or pop can run while the buffer is being replaced.
    ///
    /// # Errors
    ///
    /// `InvalidCapacity` for negative values, `OutOfMemory` if the new buffer
    /// cannot be allocated. The stack is unchanged on error.
    pub async fn set_capacity(&self, new_capacity: i64) -> Result<(), StackError> {
        self.stack.lock().await.set_capacity(new_capacity)
    }

    /// Consistent snapshot of length and capacity.
    pub async fn state(&self) -> StackState {
        let stack = self.stack.lock().await;
        StackState {
            len: stack.len(),
            capacity: stack.capacity(),
        }
    }
}

impl fmt::Debug for StackDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackDevice").finish_non_exhaustive()
    }
}
