//! Queue configuration parameters.

use slotline_core::ConfigError;

/// Configuration for an [`IndexedQueue`](crate::IndexedQueue).
///
/// Fixes the arena size and the identity universe. Validated at
/// construction; both values are immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueueConfig {
    /// Number of slots in the arena: the most entities that can be
    /// resident at once.
    pub capacity: u32,

    /// Exclusive upper bound on entity identities, and the length of the
    /// identity lookup table.
    ///
    /// Default: equal to `capacity`, so identities live in `[0, capacity)`.
    pub identity_bound: u32,
}

impl QueueConfig {
    /// Default arena size.
    pub const DEFAULT_CAPACITY: u32 = 64;

    /// Create a config whose identity universe matches its capacity.
    pub fn new(capacity: u32) -> Self {
        Self {
            capacity,
            identity_bound: capacity,
        }
    }

    /// Widen (or narrow) the identity universe independently of capacity.
    pub fn with_identity_bound(mut self, identity_bound: u32) -> Self {
        self.identity_bound = identity_bound;
        self
    }

    /// Check structural constraints.
    ///
    /// Slot and identity indices must stay representable in a `u32`, the
    /// arena must have at least one slot, and the identity universe must
    /// be at least as large as the arena.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        for value in [self.capacity, self.identity_bound] {
            if value == u32::MAX {
                return Err(ConfigError::CapacityOverflow { value });
            }
        }
        if self.identity_bound < self.capacity {
            return Err(ConfigError::IdentityBoundTooSmall {
                bound: self.identity_bound,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_bound_defaults_to_capacity() {
        let config = QueueConfig::new(16);
        assert_eq!(config.identity_bound, 16);
        config.validate().unwrap();
    }

    #[test]
    fn default_is_valid() {
        let config = QueueConfig::default();
        assert_eq!(config.capacity, QueueConfig::DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            QueueConfig::new(0).validate(),
            Err(ConfigError::ZeroCapacity)
        );
    }

    #[test]
    fn wider_identity_bound_accepted() {
        let config = QueueConfig::new(4).with_identity_bound(5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn narrower_identity_bound_rejected() {
        let config = QueueConfig::new(8).with_identity_bound(3);
        assert_eq!(
            config.validate(),
            Err(ConfigError::IdentityBoundTooSmall {
                bound: 3,
                capacity: 8
            })
        );
    }

    #[test]
    fn max_sizes_rejected() {
        assert_eq!(
            QueueConfig::new(u32::MAX).validate(),
            Err(ConfigError::CapacityOverflow { value: u32::MAX })
        );
        assert_eq!(
            QueueConfig::new(4).with_identity_bound(u32::MAX).validate(),
            Err(ConfigError::CapacityOverflow { value: u32::MAX })
        );
    }
}
