//! Stack engine - LIFO and capacity rules over an owned buffer.

use crate::domain::{
    error::StackError,
    value_objects::{Capacity, Element, StackConfig},
};
use alloc::vec::Vec;

/// Fixed-capacity, resizable LIFO of [`Element`]s.
///
/// The buffer holds exactly the live elements (`buffer.len()` is the write
/// cursor), while `capacity` is tracked separately so that the invariant
/// `len <= capacity` does not depend on the allocator's rounding.
///
/// `Stack` does no locking. Wrap it in a
/// [`StackDevice`](crate::adapters::StackDevice) to share it.
///
/// # Examples
///
/// ```
/// use stackdev::{Capacity, Stack, StackError};
///
/// let mut stack = Stack::with_capacity(Capacity::new(1)).unwrap();
/// stack.push(5).unwrap();
/// assert_eq!(stack.push(9), Err(StackError::StackFull));
/// assert_eq!(stack.pop(), Ok(5));
/// assert_eq!(stack.pop(), Err(StackError::StackEmpty));
/// ```
#[derive(Debug)]
pub struct Stack {
    buffer: Vec<Element>,
    capacity: Capacity,
}

impl Stack {
    /// Create an empty stack from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `OutOfMemory` if the initial buffer cannot be allocated.
    pub fn new(config: StackConfig) -> Result<Self, StackError> {
        Self::with_capacity(config.capacity())
    }

    /// Create an empty stack with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `OutOfMemory` if the buffer cannot be allocated.
    pub fn with_capacity(capacity: Capacity) -> Result<Self, StackError> {
        Ok(Self {
            buffer: allocate(capacity)?,
            capacity,
        })
    }

    /// Push `value` on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns `StackFull` if every slot is occupied. The stack is unchanged.
    pub fn push(&mut self, value: Element) -> Result<(), StackError> {
        trace!("push {} at {}/{}", value, self.len(), self.capacity.slots());
        if self.is_full() {
            debug!("stack is full ({} slots)", self.capacity.slots());
            return Err(StackError::StackFull);
        }
        // Room was reserved up front, so this never reallocates.
        self.buffer.push(value);
        Ok(())
    }

    /// Remove and return the most recently pushed element.
    ///
    /// # Errors
    ///
    /// Returns `StackEmpty` if there is nothing to pop. The stack is unchanged.
    pub fn pop(&mut self) -> Result<Element, StackError> {
        trace!("pop at {}/{}", self.len(), self.capacity.slots());
        self.buffer.pop().ok_or_else(|| {
            debug!("stack is empty");
            StackError::StackEmpty
        })
    }

    /// Change the capacity from an unvalidated request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` for negative values, or `OutOfMemory` as
    /// described in [`Stack::resize`]. The stack is unchanged on error.
    pub fn set_capacity(&mut self, new_capacity: i64) -> Result<(), StackError> {
        let capacity = Capacity::try_from(new_capacity).inspect_err(|_| {
            warn!("rejected stack capacity {}", new_capacity);
        })?;
        self.resize(capacity)
    }

    /// Move the contents into a freshly allocated buffer of `capacity` slots.
    ///
    /// The oldest `min(len, capacity)` elements are kept in order. When
    /// shrinking below the current length the newest elements are dropped.
    ///
    /// # Errors
    ///
    /// Returns `OutOfMemory` if the new buffer cannot be allocated. The old
    /// buffer is kept untouched in that case.
    pub fn resize(&mut self, capacity: Capacity) -> Result<(), StackError> {
        info!(
            "resizing stack {} -> {} slots ({} live)",
            self.capacity.slots(),
            capacity.slots(),
            self.len()
        );
        let mut buffer = allocate(capacity)?;
        let kept = self.len().min(capacity.slots());
        buffer.extend_from_slice(&self.buffer[..kept]);

        if kept < self.len() {
            warn!("shrink discarded {} elements", self.len() - kept);
        }

        self.buffer = buffer;
        self.capacity = capacity;
        Ok(())
    }

    /// Number of elements currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` if no more elements can be pushed.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity.slots()
    }

    /// Current capacity.
    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Live elements, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[Element] {
        &self.buffer
    }
}

fn allocate(capacity: Capacity) -> Result<Vec<Element>, StackError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(capacity.slots()).map_err(|_| {
        warn!("failed to allocate {} stack slots", capacity.slots());
        StackError::OutOfMemory {
            requested: capacity.slots(),
        }
    })?;
    Ok(buffer)
}
