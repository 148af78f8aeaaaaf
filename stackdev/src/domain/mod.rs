//! Domain layer - the stack engine with zero locking or I/O.
//!
//! The domain layer contains:
//! - **Value Objects**: Validated data (`Capacity`, `StackConfig`) and the
//!   fixed-width element framing
//! - **Engine**: `Stack`, which enforces the LIFO and capacity rules
//! - **Domain Errors**: Rule violations (`StackError`)
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer (Core)         │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │      Value Objects         │  │
//!     │  │  - Capacity, StackConfig   │  │
//!     │  └────────────────────────────┘  │
//!     │              ▲                   │
//!     │              │                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │      Engine                │  │
//!     │  │      - Stack               │  │
//!     │  └────────────────────────────┘  │
//!     └──────────────────────────────────┘
//!                    ▲
//!                    │ guarded by
//!                    │
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - StackDevice (one lock)        │
//!     └──────────────────────────────────┘
//! ```
//!
//! `Stack` is not synchronized. Sharing it between callers is the job of
//! [`StackDevice`](crate::adapters::StackDevice).

pub mod error;
pub mod value_objects;

mod stack;

pub use error::StackError;
pub use stack::Stack;
pub use value_objects::{
    Capacity, Element, StackConfig, DEFAULT_CAPACITY, ELEMENT_SIZE, decode_element,
    encode_element,
};
