//! Shared integer stack device with a byte-stream interface.
//!
//! This crate exposes one resizable LIFO stack of `i32` elements to any number
//! of concurrent callers through byte-oriented read/write calls plus a single
//! control operation that changes the capacity at runtime.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! ## Domain Layer (`domain`)
//! Pure stack logic with no locking and no I/O:
//! - **Value Objects**: `Capacity`, `StackConfig`, element framing
//! - **Engine**: `Stack` with push/pop/resize rules
//! - **Errors**: `StackError`
//!
//! ## Adapter Layer (`adapters`)
//! - **`StackDevice`**: The explicitly owned shared instance. Every element
//!   operation takes one exclusive lock for its own duration only.
//!
//! ## Infrastructure Layer (`infrastructure`)
//! - **`StackStream`**: Splits byte reads/writes into 4-byte element operations
//!   and implements `embedded_io_async::{Read, Write}`.
//!
//! # Quick Start
//!
//! ```ignore
//! use stackdev::{StackConfig, StackDevice};
//! use embedded_io_async::{Read, Write};
//!
//! let device = StackDevice::new(StackConfig::default())?;
//! let mut stream = device.open();
//!
//! stream.write(&42i32.to_ne_bytes()).await?;
//!
//! let mut buf = [0u8; 4];
//! let n = stream.read(&mut buf).await?;
//! assert_eq!(n, 4);
//! assert_eq!(i32::from_ne_bytes(buf), 42);
//!
//! stream.set_capacity(16).await?;
//! ```
//!
//! # Concurrency
//!
//! A multi-element read or write is a sequence of short critical sections, so
//! elements from different callers may interleave. Each single push, pop or
//! resize is atomic.
//!
//! # Features
//!
//! - `std`: Enable standard library features
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded
//! - `runtime-tokio`: Use tokio synchronization primitives
//! - `runtime-generic`: Use async-lock (portable async)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)]

extern crate alloc;

#[macro_use]
mod macros;

// Core layers
pub mod domain;
pub mod adapters;
pub mod infrastructure;

pub use domain::{
    Capacity, ELEMENT_SIZE, Stack, StackConfig, StackError, DEFAULT_CAPACITY,
};

pub use adapters::{StackDevice, StackState};

pub use infrastructure::streaming::{StackStream, StreamError};

// Re-export embedded_io_async for convenience
pub use embedded_io_async;
