//! List configuration and validation.

use std::error::Error;
use std::fmt;

/// Configuration for an [`ArenaList`](crate::ArenaList).
///
/// Validated at construction; immutable afterwards. The backing storage is
/// sized exactly to `capacity` and never grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Number of slots in the arena, i.e. the maximum live node count.
    ///
    /// Must be at least 1.
    pub capacity: usize,
}

impl ListConfig {
    /// Default capacity, matching the size used by the demo driver.
    pub const DEFAULT_CAPACITY: usize = 64;

    /// Create a config for the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Check structural constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Errors detected by [`ListConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity was zero; a list needs at least one slot.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "list capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
