//! Byte-oriented handle onto the shared stack.

use crate::{
    adapters::{StackDevice, StackState},
    domain::{ELEMENT_SIZE, StackError, decode_element, encode_element},
    infrastructure::streaming::StreamError,
};

/// Stream handle translating byte reads and writes into element operations.
///
/// Obtained from [`StackDevice::open`]. A handle holds nothing but a borrow
/// of the device, so any number of handles may be used concurrently.
///
/// # Reads
///
/// A read pops whole 4-byte elements, newest first, in host byte order:
/// - It stops when the buffer has no room for another whole element, so at
///   most `buf.len() / 4 * 4` bytes are produced.
/// - An empty stack yields `Ok(0)`, the end-of-stream signal. Running empty
///   part way through yields a short read.
///
/// # Writes
///
/// A write pushes the input 4 bytes at a time. A trailing chunk shorter than
/// 4 bytes is zero-padded and still pushed, and counts only its own bytes.
/// - A full stack on the first element is an error (`StackFull`).
/// - A full stack on a later element ends the write early and returns the
///   bytes consumed so far. Elements already pushed stay pushed.
///
/// # Examples
///
/// ```ignore
/// let device = StackDevice::new(StackConfig::default())?;
/// let mut stream = device.open();
///
/// assert_eq!(stream.write(&[0x2A, 0, 0, 0]).await?, 4);
///
/// let mut buf = [0u8; 4];
/// assert_eq!(stream.read(&mut buf).await?, 4);
/// assert_eq!(buf, [0x2A, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StackStream<'d> {
    device: &'d StackDevice,
}

impl<'d> StackStream<'d> {
    pub(crate) fn new(device: &'d StackDevice) -> Self {
        Self { device }
    }

    /// Get the device this handle was opened on.
    pub fn device(&self) -> &'d StackDevice {
        self.device
    }

    /// Pop elements into `buf`.
    ///
    /// Returns the number of bytes produced, always a multiple of 4.
    pub async fn read(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        let mut produced = 0;

        for slot in buf.chunks_exact_mut(ELEMENT_SIZE) {
            match self.device.pop().await {
                Ok(value) => {
                    slot.copy_from_slice(&encode_element(value));
                    produced += ELEMENT_SIZE;
                }
                Err(StackError::StackEmpty) => break,
                Err(e) => return Err(e.into()),
            }
        }

        debug!("read {} of {} bytes", produced, buf.len());
        Ok(produced)
    }

    /// Push the contents of `buf` as elements.
    ///
    /// Returns the number of bytes consumed.
    pub async fn write(&mut self, buf: &[u8]) -> Result<usize, StreamError> {
        let mut consumed = 0;

        for chunk in buf.chunks(ELEMENT_SIZE) {
            match self.device.push(decode_element(chunk)).await {
                Ok(()) => consumed += chunk.len(),
                Err(StackError::StackFull) if consumed > 0 => {
                    debug!("short write, stack full after {} bytes", consumed);
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        debug!("wrote {} of {} bytes", consumed, buf.len());
        Ok(consumed)
    }

    /// Nothing is buffered in the handle, so this always succeeds.
    pub async fn flush(&mut self) -> Result<(), StreamError> {
        Ok(())
    }

    /// The capacity-change control call.
    ///
    /// Forwards to [`StackDevice::set_capacity`]; errors surface unchanged.
    pub async fn set_capacity(&self, new_capacity: i64) -> Result<(), StackError> {
        self.device.set_capacity(new_capacity).await
    }

    /// Snapshot of the device's fill level.
    pub async fn state(&self) -> StackState {
        self.device.state().await
    }
}
