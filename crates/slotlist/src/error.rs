//! List and allocator error types.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;

/// Errors that can occur during list or slot allocator operations.
///
/// Every fallible operation checks its preconditions before touching any
/// state, so an `Err` always means nothing was mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The slot allocator has no free slot left.
    OutOfCapacity {
        /// Total slot count of the allocator.
        capacity: usize,
    },
    /// An insert was attempted on a list holding `capacity` nodes.
    Full {
        /// Total slot count of the list.
        capacity: usize,
    },
    /// A positional operation received an index outside its valid range.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Exclusive upper bound the index had to stay below.
        bound: usize,
    },
    /// A first/last operation was attempted on an empty list.
    EmptyList,
    /// A caller contract was broken (e.g. a slot released twice) or the
    /// slot/link bookkeeping no longer satisfies its invariants.
    InvalidState {
        /// Human-readable description of the violation.
        reason: String,
    },
    /// The list configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfCapacity { capacity } => {
                write!(f, "slot allocator exhausted: all {capacity} slots in use")
            }
            Self::Full { capacity } => {
                write!(f, "list is full: capacity {capacity}")
            }
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range: must be below {bound}")
            }
            Self::EmptyList => write!(f, "list is empty"),
            Self::InvalidState { reason } => write!(f, "invalid list state: {reason}"),
            Self::Config(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for ListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ListError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = ListError::IndexOutOfRange { index: 5, bound: 3 };
        assert_eq!(err.to_string(), "index 5 out of range: must be below 3");
        assert_eq!(
            ListError::Full { capacity: 4 }.to_string(),
            "list is full: capacity 4"
        );
    }

    #[test]
    fn config_error_is_source() {
        let err: ListError = ConfigError::ZeroCapacity.into();
        assert!(err.source().is_some());
        assert!(ListError::EmptyList.source().is_none());
    }
}
