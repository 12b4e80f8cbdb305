//! Structural invariant checks for [`IndexedQueue`].
//!
//! The checker walks both chains, so it is O(capacity) and meant for tests
//! and debugging, never for the hot path. Every walk is bounded by the
//! arena size, so a corrupted link cannot make it loop forever.

use slotline_core::{Identified, Identity, SlotIndex};

use crate::error::InvariantViolation;
use crate::queue::IndexedQueue;

impl<T: Identified> IndexedQueue<T> {
    /// Verify every structural invariant of the queue.
    ///
    /// Checks, in order: the head/tail anchors agree on emptiness; the
    /// active list is acyclic, back-linked, carries payloads and has
    /// exactly `len` slots ending at `tail`; the free list is acyclic,
    /// disjoint from the active list and carries no payloads; every slot is
    /// on one of the two lists; the lookup table maps exactly the resident
    /// identities to their slots.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let capacity = self.capacity();

        match (self.head_slot(), self.tail_slot()) {
            (None, None) if !self.is_empty() => {
                return Err(InvariantViolation::AnchorMismatch {
                    reason: "head and tail absent on a non-empty queue",
                });
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err(InvariantViolation::AnchorMismatch {
                    reason: "exactly one of head and tail is absent",
                });
            }
            _ => {}
        }

        let mut on_active = vec![false; capacity];
        let mut walked = 0u32;
        let mut last = None;
        let mut cursor = self.head_slot();
        while let Some(slot) = cursor {
            let i = slot.index();
            if i >= capacity || on_active[i] {
                return Err(InvariantViolation::CycleDetected { list: "active" });
            }
            on_active[i] = true;
            let found = self.prev_of(slot);
            if found != last {
                return Err(InvariantViolation::BrokenBackLink {
                    slot,
                    expected: last,
                    found,
                });
            }
            if self.payload_at(slot).is_none() {
                return Err(InvariantViolation::PayloadMismatch { slot });
            }
            walked += 1;
            last = Some(slot);
            cursor = self.next_of(slot);
        }
        if last != self.tail_slot() {
            return Err(InvariantViolation::AnchorMismatch {
                reason: "tail is not the last slot reached from head",
            });
        }
        if walked as usize != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len() as u32,
                walked,
            });
        }

        let mut on_free = vec![false; capacity];
        let mut cursor = self.free_head();
        while let Some(slot) = cursor {
            let i = slot.index();
            if i >= capacity || on_free[i] {
                return Err(InvariantViolation::CycleDetected { list: "free" });
            }
            if on_active[i] {
                return Err(InvariantViolation::SlotInBothLists { slot });
            }
            on_free[i] = true;
            if self.payload_at(slot).is_some() {
                return Err(InvariantViolation::PayloadMismatch { slot });
            }
            cursor = self.next_of(slot);
        }

        for i in 0..capacity {
            if !on_active[i] && !on_free[i] {
                return Err(InvariantViolation::SlotUnreachable {
                    slot: SlotIndex(i as u32),
                });
            }
        }

        let lookup = self.lookup_table();
        for (i, occupied) in on_active.iter().enumerate() {
            if !occupied {
                continue;
            }
            let slot = SlotIndex(i as u32);
            let Some(identity) = self.payload_at(slot).map(Identified::identity) else {
                continue;
            };
            let recorded = lookup.get(identity.index()).copied().flatten();
            if recorded != Some(slot) {
                return Err(InvariantViolation::LookupMismatch {
                    identity,
                    recorded,
                    actual: Some(slot),
                });
            }
        }
        for (id, entry) in lookup.iter().enumerate() {
            let Some(slot) = *entry else {
                continue;
            };
            let identity = Identity(id as u32);
            let resident = slot.index() < capacity
                && on_active[slot.index()]
                && self.payload_at(slot).map(Identified::identity) == Some(identity);
            if !resident {
                return Err(InvariantViolation::LookupMismatch {
                    identity,
                    recorded: Some(slot),
                    actual: None,
                });
            }
        }

        Ok(())
    }
}
