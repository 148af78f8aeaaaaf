//! Implementations of embedded_io_async traits for [`StackStream`].
//!
//! These bridge the stream to the embedded_io_async ecosystem, so a handle
//! can be passed anywhere a generic async reader or writer is accepted.

use crate::infrastructure::streaming::{StackStream, StreamError};
use embedded_io_async::{ErrorType, Read, Write};

impl ErrorType for StackStream<'_> {
    type Error = StreamError;
}

impl Read for StackStream<'_> {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        StackStream::read(self, buf).await
    }
}

impl Write for StackStream<'_> {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        StackStream::write(self, buf).await
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        StackStream::flush(self).await
    }
}
