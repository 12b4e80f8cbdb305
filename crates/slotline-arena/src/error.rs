//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use slotline_core::{Identity, QueueError, SlotIndex};

/// An enqueue that was refused, handing the entity back to the caller.
///
/// The queue is left untouched, so the caller can apply backpressure,
/// retry after a dequeue, or route the entity elsewhere.
#[derive(Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    entity: T,
    reason: QueueError,
}

impl<T> Rejected<T> {
    pub(crate) fn new(entity: T, reason: QueueError) -> Self {
        Self { entity, reason }
    }

    /// Why the entity was refused.
    pub fn reason(&self) -> &QueueError {
        &self.reason
    }

    /// Whether the refusal was caused by a full arena.
    pub fn is_full(&self) -> bool {
        matches!(self.reason, QueueError::CapacityExceeded { .. })
    }

    /// The refused entity.
    pub fn entity(&self) -> &T {
        &self.entity
    }

    /// Take the refused entity back.
    pub fn into_inner(self) -> T {
        self.entity
    }

    /// Split into the entity and the reason.
    pub fn into_parts(self) -> (T, QueueError) {
        (self.entity, self.reason)
    }
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enqueue rejected: {}", self.reason)
    }
}

impl<T> Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}

impl<T> From<Rejected<T>> for QueueError {
    fn from(r: Rejected<T>) -> Self {
        r.reason
    }
}

/// A broken structural invariant, reported by
/// [`IndexedQueue::check_invariants`](crate::IndexedQueue::check_invariants).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `head` and `tail` disagree about whether the queue is empty, or
    /// point at slots that are not list boundaries.
    AnchorMismatch {
        /// What was wrong with the anchors.
        reason: &'static str,
    },
    /// Walking the active list did not visit `len` slots.
    LengthMismatch {
        /// Recorded length.
        recorded: u32,
        /// Slots actually reached from `head`.
        walked: u32,
    },
    /// A slot's `prev` link does not point back at its predecessor.
    BrokenBackLink {
        /// The slot whose back link is wrong.
        slot: SlotIndex,
        /// What `prev` should hold.
        expected: Option<SlotIndex>,
        /// What `prev` actually holds.
        found: Option<SlotIndex>,
    },
    /// A chain revisited a slot or ran past the arena size.
    CycleDetected {
        /// Which chain looped.
        list: &'static str,
    },
    /// A slot was reached from both the active list and the free list.
    SlotInBothLists {
        /// The shared slot.
        slot: SlotIndex,
    },
    /// A slot belongs to neither list.
    SlotUnreachable {
        /// The orphaned slot.
        slot: SlotIndex,
    },
    /// A payload is present on a free slot or missing on an occupied one.
    PayloadMismatch {
        /// The inconsistent slot.
        slot: SlotIndex,
    },
    /// The lookup table disagrees with slot occupancy.
    LookupMismatch {
        /// The identity whose entry is wrong.
        identity: Identity,
        /// Slot the lookup table records.
        recorded: Option<SlotIndex>,
        /// Slot actually holding that identity.
        actual: Option<SlotIndex>,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnchorMismatch { reason } => write!(f, "anchor mismatch: {reason}"),
            Self::LengthMismatch { recorded, walked } => {
                write!(f, "length mismatch: recorded {recorded}, walked {walked}")
            }
            Self::BrokenBackLink {
                slot,
                expected,
                found,
            } => {
                write!(
                    f,
                    "broken back link at slot {slot}: expected {expected:?}, found {found:?}"
                )
            }
            Self::CycleDetected { list } => write!(f, "cycle detected in {list} list"),
            Self::SlotInBothLists { slot } => {
                write!(f, "slot {slot} is on both the active and free lists")
            }
            Self::SlotUnreachable { slot } => {
                write!(f, "slot {slot} is on neither the active nor the free list")
            }
            Self::PayloadMismatch { slot } => {
                write!(f, "payload presence at slot {slot} contradicts its list")
            }
            Self::LookupMismatch {
                identity,
                recorded,
                actual,
            } => {
                write!(
                    f,
                    "lookup for identity {identity} records {recorded:?}, actual {actual:?}"
                )
            }
        }
    }
}

impl Error for InvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_returns_entity() {
        let r = Rejected::new("payload", QueueError::CapacityExceeded { capacity: 2 });
        assert!(r.is_full());
        assert_eq!(*r.entity(), "payload");
        assert_eq!(r.into_inner(), "payload");
    }

    #[test]
    fn rejected_source_is_reason() {
        let r = Rejected::new(
            1u8,
            QueueError::IdentityOutOfRange {
                identity: Identity(9),
                bound: 4,
            },
        );
        assert!(!r.is_full());
        let source = r.source().map(|e| e.to_string());
        assert_eq!(
            source.as_deref(),
            Some("identity 9 out of range: must be below 4")
        );
        let e: QueueError = r.into();
        assert!(matches!(e, QueueError::IdentityOutOfRange { .. }));
    }

    #[test]
    fn violation_display() {
        let v = InvariantViolation::LengthMismatch {
            recorded: 3,
            walked: 2,
        };
        assert_eq!(v.to_string(), "length mismatch: recorded 3, walked 2");
    }
}
