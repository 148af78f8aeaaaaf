//! Adapter layer - sharing the domain engine between concurrent callers.
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer                │
//!     │  - Stack (engine)                │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ guarded by
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │  ◄── This module
//!     │  - StackDevice                   │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ opened as
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │  Infrastructure (StackStream)    │
//!     └──────────────────────────────────┘
//! ```

mod stack_device;
mod sync;

pub use stack_device::{StackDevice, StackState};
