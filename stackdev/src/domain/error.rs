//! Domain-level errors.
//!
//! These errors represent stack rule violations and allocation failures.
//! Failures of the byte endpoint a caller reads from or writes to are not
//! domain errors; they come through [`StreamError`](crate::StreamError).

use core::fmt;

/// Errors that can occur in the stack engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum StackError {
    /// A push was attempted while every slot is occupied.
    StackFull,

    /// A pop was attempted on a stack holding no elements.
    StackEmpty,

    /// A negative capacity was requested.
    InvalidCapacity {
        /// The rejected value.
        requested: i64,
    },

    /// The buffer for a new capacity could not be allocated.
    ///
    /// The previous buffer is left in place.
    OutOfMemory {
        /// The slot count that could not be allocated.
        requested: usize,
    },
}

impl StackError {
    /// The errno value a character device would report for this error.
    pub const fn errno(&self) -> i32 {
        match self {
            Self::StackFull => 28,                 // ENOSPC
            Self::StackEmpty => 61,                // ENODATA
            Self::InvalidCapacity { .. } => 22,    // EINVAL
            Self::OutOfMemory { .. } => 12,        // ENOMEM
        }
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackFull => write!(f, "Stack is full"),
            Self::StackEmpty => write!(f, "Stack is empty"),
            Self::InvalidCapacity { requested } => {
                write!(f, "Invalid stack capacity {} (must be non-negative)", requested)
            }
            Self::OutOfMemory { requested } => {
                write!(f, "Out of memory allocating {} stack slots", requested)
            }
        }
    }
}

impl core::error::Error for StackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_display() {
        let msg = format!("{}", StackError::InvalidCapacity { requested: -1 });
        assert!(msg.contains("-1"));
        assert!(msg.contains("non-negative"));
    }

    #[test]
    fn test_errno_values() {
        assert_eq!(StackError::StackFull.errno(), 28);
        assert_eq!(StackError::StackEmpty.errno(), 61);
        assert_eq!(StackError::InvalidCapacity { requested: -3 }.errno(), 22);
        assert_eq!(StackError::OutOfMemory { requested: 1 }.errno(), 12);
    }
}
