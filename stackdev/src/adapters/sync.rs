//! Mutex selection for the device lock.
//!
//! `runtime-tokio` swaps in `tokio::sync::Mutex`; otherwise `runtime-generic`
//! uses `async-lock`, which works with any executor and in `no_std`.

#[cfg(not(any(feature = "runtime-generic", feature = "runtime-tokio")))]
compile_error!("enable either the `runtime-generic` or the `runtime-tokio` feature");

#[cfg(feature = "runtime-tokio")]
pub(crate) use tokio::sync::Mutex;

#[cfg(all(feature = "runtime-generic", not(feature = "runtime-tokio")))]
pub(crate) use async_lock::Mutex;
