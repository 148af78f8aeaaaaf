//! Byte-stream access to a [`StackDevice`](crate::StackDevice).
//!
//! Reads pop, writes push, one 4-byte element at a time. See [`StackStream`]
//! for the short-read and short-write rules.

mod stack_stream;
mod transfer;
mod embedded_io_impl;

pub use stack_stream::StackStream;

use crate::domain::StackError;
use core::{convert::Infallible, fmt};

/// Unified error type for streaming operations.
///
/// `E` is the error of an external byte endpoint used with
/// [`StackStream::read_into`] or [`StackStream::write_from`]. Plain slice I/O
/// cannot fail at the endpoint, so it defaults to `Infallible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamError<E = Infallible> {
    /// Error from the stack engine.
    Stack(StackError),
    /// The external endpoint failed while bytes were being copied.
    Transport(E),
    /// The external source ended before the announced length was read.
    UnexpectedEof,
}

impl<E> StreamError<E> {
    /// The errno value a character device would report for this error.
    pub fn errno(&self) -> i32 {
        match self {
            Self::Stack(e) => e.errno(),
            Self::Transport(_) | Self::UnexpectedEof => 14, // EFAULT
        }
    }
}

impl<E> From<StackError> for StreamError<E> {
    fn from(err: StackError) -> Self {
        Self::Stack(err)
    }
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stack(e) => write!(f, "Stack error: {}", e),
            Self::Transport(e) => write!(f, "Transport fault: {}", e),
            Self::UnexpectedEof => write!(f, "Transport fault: source ended early"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for StreamError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Stack(e) => Some(e),
            _ => None,
        }
    }
}

// Implement embedded_io_async::Error so streams can be used with embedded_io_async
impl<E: fmt::Debug + fmt::Display> embedded_io_async::Error for StreamError<E> {
    fn kind(&self) -> embedded_io_async::ErrorKind {
        match self {
            Self::Stack(StackError::StackFull) => embedded_io_async::ErrorKind::WriteZero,
            Self::Stack(StackError::InvalidCapacity { .. }) => {
                embedded_io_async::ErrorKind::InvalidInput
            }
            Self::Stack(StackError::OutOfMemory { .. }) => embedded_io_async::ErrorKind::OutOfMemory,
            _ => embedded_io_async::ErrorKind::Other,
        }
    }
}
