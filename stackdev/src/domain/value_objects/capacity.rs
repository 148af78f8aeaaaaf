//! Validated stack capacity.

use crate::domain::StackError;
use core::fmt;

/// A validated, non-negative number of element slots.
///
/// Raw capacities arrive as signed integers from the control call, so the
/// only way to build one from untrusted input is [`Capacity::try_from`],
/// which rejects negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Capacity(usize);

impl Capacity {
    /// A capacity of zero slots. Every push is rejected.
    pub const ZERO: Self = Self(0);

    /// Create a capacity of `slots` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackdev::Capacity;
    ///
    /// let capacity = Capacity::new(8);
    /// assert_eq!(capacity.slots(), 8);
    /// ```
    #[inline]
    pub const fn new(slots: usize) -> Self {
        Self(slots)
    }

    /// Get the number of slots.
    #[inline]
    pub const fn slots(self) -> usize {
        self.0
    }

    /// Size of a buffer with this many slots, in bytes.
    ///
    /// Returns `None` if the size does not fit in `usize`.
    #[inline]
    pub const fn byte_len(self) -> Option<usize> {
        self.0.checked_mul(super::ELEMENT_SIZE)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = StackError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        if requested < 0 {
            return Err(StackError::InvalidCapacity { requested });
        }
        usize::try_from(requested)
            .map(Self)
            .map_err(|_| StackError::OutOfMemory {
                requested: usize::MAX,
            })
    }
}

impl TryFrom<i32> for Capacity {
    type Error = StackError;

    fn try_from(requested: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(requested))
    }
}

impl From<usize> for Capacity {
    fn from(slots: usize) -> Self {
        Self::new(slots)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} slots", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_rejects_negative() {
        assert_eq!(
            Capacity::try_from(-1i32),
            Err(StackError::InvalidCapacity { requested: -1 })
        );
        assert_eq!(
            Capacity::try_from(i64::MIN),
            Err(StackError::InvalidCapacity { requested: i64::MIN })
        );
    }

    #[test]
    fn test_try_from_accepts_zero_and_positive() {
        assert_eq!(Capacity::try_from(0i32), Ok(Capacity::ZERO));
        assert_eq!(Capacity::try_from(8i32).map(Capacity::slots), Ok(8));
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(Capacity::new(8).byte_len(), Some(32));
        assert_eq!(Capacity::new(usize::MAX).byte_len(), None);
    }
}
