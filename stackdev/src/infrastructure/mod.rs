//! Infrastructure layer - byte-stream I/O built on the shared device.
//!
//! This module turns variable-length byte reads and writes into sequences of
//! 4-byte element operations, implementing async Read/Write for integration
//! with `embedded_io_async` transports.

pub mod streaming;
