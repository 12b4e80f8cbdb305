//! Error types for queue operations and queue configuration.
//!
//! Only conditions the caller must react to are errors. An empty queue,
//! an absent entity and a duplicate enqueue are ordinary outcomes and are
//! reported through return values instead.

use std::error::Error;
use std::fmt;

use crate::id::Identity;

/// Errors from queue operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// Every slot is occupied; the entity was not inserted.
    CapacityExceeded {
        /// Number of slots in the arena.
        capacity: u32,
    },
    /// The entity's identity does not fit in the lookup table.
    IdentityOutOfRange {
        /// The offending identity.
        identity: Identity,
        /// Exclusive upper bound on valid identities.
        bound: u32,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "queue is full: all {capacity} slots occupied")
            }
            Self::IdentityOutOfRange { identity, bound } => {
                write!(f, "identity {identity} out of range: must be below {bound}")
            }
        }
    }
}

impl Error for QueueError {}

/// Errors detected while validating a queue configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity must be at least 1.
    ZeroCapacity,
    /// The identity universe is smaller than the arena, so the queue
    /// could never fill.
    IdentityBoundTooSmall {
        /// Configured identity bound.
        bound: u32,
        /// Configured capacity.
        capacity: u32,
    },
    /// A size does not leave room for slot indices to be represented.
    CapacityOverflow {
        /// The value that overflowed.
        value: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "capacity must be at least 1"),
            Self::IdentityBoundTooSmall { bound, capacity } => {
                write!(
                    f,
                    "identity bound {bound} is smaller than capacity {capacity}"
                )
            }
            Self::CapacityOverflow { value } => {
                write!(f, "size {value} exceeds the maximum of {}", u32::MAX - 1)
            }
        }
    }
}

impl Error for ConfigError {}
