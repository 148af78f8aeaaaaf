//! Stack configuration value object.

use super::Capacity;
use crate::domain::StackError;

/// Capacity a freshly created device starts with.
pub const DEFAULT_CAPACITY: usize = 8;

/// Start-up configuration for a stack device.
///
/// # Examples
///
/// ```
/// use stackdev::{StackConfig, DEFAULT_CAPACITY};
///
/// let config = StackConfig::default();
/// assert_eq!(config.capacity().slots(), DEFAULT_CAPACITY);
///
/// let config = StackConfig::from_raw(32).unwrap();
/// assert_eq!(config.capacity().slots(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackConfig {
    capacity: Capacity,
}

impl StackConfig {
    /// Create a configuration with the given initial capacity.
    pub const fn new(capacity: Capacity) -> Self {
        Self { capacity }
    }

    /// Create a configuration from an unvalidated capacity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `capacity` is negative.
    pub fn from_raw(capacity: i32) -> Result<Self, StackError> {
        Capacity::try_from(capacity).map(Self::new)
    }

    /// Get the initial capacity.
    #[inline]
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new(Capacity::new(DEFAULT_CAPACITY))
    }
}
