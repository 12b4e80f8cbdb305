//! The identity-indexed slot queue.
//!
//! [`IndexedQueue`] keeps FIFO order over a fixed arena of slots. The
//! order is an intrusive doubly linked list threaded through two index
//! arrays, and an identity → slot table makes removal of any resident
//! entity a constant-time splice.
//!
//! Storage is struct-of-arrays, one entry per slot:
//!
//! ```text
//! payload: [Option<T>; C]          entity stored in the slot
//! next:    [Option<SlotIndex>; C]  successor, in whichever list owns the slot
//! prev:    [Option<SlotIndex>; C]  predecessor in the active list
//! lookup:  [Option<SlotIndex>; B]  identity -> occupied slot
//! ```
//!
//! `next` is shared by two chains. For an occupied slot it links towards
//! the tail of the active list; for a free slot it links to the next free
//! slot. Every slot is on exactly one of the two chains. `prev` is only
//! meaningful for occupied slots and is cleared when a slot is released.

use std::fmt;

use slotline_core::{ConfigError, Identified, Identity, QueueError, SlotIndex};
use tracing::{debug, trace};

use crate::config::QueueConfig;
use crate::error::Rejected;
use crate::iter::{Drain, IntoIter, Iter};

/// Outcome of a successful [`IndexedQueue::enqueue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Enqueued {
    /// The entity was appended at the tail, in the given slot.
    Inserted(SlotIndex),
    /// An entity with the same identity was already resident in the given
    /// slot. Nothing changed.
    AlreadyPresent(SlotIndex),
}

impl Enqueued {
    /// Slot now holding the identity.
    pub fn slot(self) -> SlotIndex {
        match self {
            Self::Inserted(slot) | Self::AlreadyPresent(slot) => slot,
        }
    }

    /// Whether the call inserted a new entity.
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}

/// A fixed-capacity FIFO queue with O(1) removal by identity.
///
/// Every operation except construction, [`clear`](Self::clear) and
/// iteration runs in constant time and never walks the queue. The arena
/// never grows: once constructed, a queue holds at most
/// [`capacity`](Self::capacity) entities, and vacated slots are recycled
/// through an internal free list.
///
/// Entities are keyed by [`Identified::identity`]. An entity's identity
/// must stay fixed while it is resident.
pub struct IndexedQueue<T> {
    config: QueueConfig,
    payload: Vec<Option<T>>,
    next: Vec<Option<SlotIndex>>,
    prev: Vec<Option<SlotIndex>>,
    lookup: Vec<Option<SlotIndex>>,
    /// Oldest occupied slot.
    head: Option<SlotIndex>,
    /// Newest occupied slot.
    tail: Option<SlotIndex>,
    /// First slot of the free chain.
    free: Option<SlotIndex>,
    len: u32,
}

impl<T> IndexedQueue<T> {
    /// Create an empty queue with `capacity` slots, accepting identities
    /// in `[0, capacity)`.
    pub fn new(capacity: u32) -> Result<Self, ConfigError> {
        Self::with_config(QueueConfig::new(capacity))
    }

    /// Create an empty queue from a validated config.
    pub fn with_config(config: QueueConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.capacity as usize;
        let mut queue = Self {
            config,
            payload: (0..capacity).map(|_| None).collect(),
            next: vec![None; capacity],
            prev: vec![None; capacity],
            lookup: vec![None; config.identity_bound as usize],
            head: None,
            tail: None,
            free: None,
            len: 0,
        };
        queue.thread_free_list();
        debug!(
            capacity = config.capacity,
            identity_bound = config.identity_bound,
            "indexed queue created"
        );
        Ok(queue)
    }

    /// Chain every slot into the free list, highest index first.
    fn thread_free_list(&mut self) {
        for (i, link) in self.next.iter_mut().enumerate() {
            *link = i.checked_sub(1).map(|p| SlotIndex(p as u32));
        }
        self.prev.fill(None);
        self.free = Some(SlotIndex(self.config.capacity - 1));
    }

    /// The configuration this queue was built with.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Number of resident entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether no entity is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.config.capacity
    }

    /// Number of slots in the arena.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity as usize
    }

    /// Exclusive upper bound on accepted identities.
    #[inline]
    pub fn identity_bound(&self) -> u32 {
        self.config.identity_bound
    }

    /// Number of slots available to [`enqueue`](Self::enqueue).
    #[inline]
    pub fn free_slots(&self) -> usize {
        (self.config.capacity - self.len) as usize
    }

    /// Slot currently holding `identity`, if resident.
    pub fn slot_of(&self, identity: Identity) -> Option<SlotIndex> {
        self.lookup.get(identity.index()).copied().flatten()
    }

    /// Whether an entity with `identity` is resident.
    pub fn contains(&self, identity: Identity) -> bool {
        self.slot_of(identity).is_some()
    }

    /// The resident entity with `identity`.
    pub fn get(&self, identity: Identity) -> Option<&T> {
        self.slot_of(identity)
            .and_then(|slot| self.payload[slot.index()].as_ref())
    }

    /// The entity the next [`dequeue`](Self::dequeue) will return.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|slot| self.payload[slot.index()].as_ref())
    }

    /// The most recently enqueued resident entity.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|slot| self.payload[slot.index()].as_ref())
    }

    /// Iterate over resident entities from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Drop every resident entity and restore the freshly constructed
    /// layout. Runs in O(capacity).
    pub fn clear(&mut self) {
        let dropped = self.len;
        self.payload.iter_mut().for_each(|p| *p = None);
        self.lookup.fill(None);
        self.thread_free_list();
        self.head = None;
        self.tail = None;
        self.len = 0;
        debug!(dropped, "indexed queue cleared");
    }

    pub(crate) fn head_slot(&self) -> Option<SlotIndex> {
        self.head
    }

    pub(crate) fn tail_slot(&self) -> Option<SlotIndex> {
        self.tail
    }

    pub(crate) fn free_head(&self) -> Option<SlotIndex> {
        self.free
    }

    pub(crate) fn next_of(&self, slot: SlotIndex) -> Option<SlotIndex> {
        self.next[slot.index()]
    }

    pub(crate) fn prev_of(&self, slot: SlotIndex) -> Option<SlotIndex> {
        self.prev[slot.index()]
    }

    pub(crate) fn payload_at(&self, slot: SlotIndex) -> Option<&T> {
        self.payload[slot.index()].as_ref()
    }

    pub(crate) fn lookup_table(&self) -> &[Option<SlotIndex>] {
        &self.lookup
    }

    /// Push `slot` onto the free chain. The caller has already taken its
    /// payload and unlinked it from the active list.
    fn release(&mut self, slot: SlotIndex) {
        let i = slot.index();
        self.prev[i] = None;
        self.next[i] = self.free;
        self.free = Some(slot);
        self.len -= 1;
    }

    /// Unlink the head slot and recycle it. Leaves the lookup table alone.
    fn unlink_head(&mut self, head: SlotIndex) -> Option<T> {
        let i = head.index();
        // Must be read before release() reuses next[i] for the free chain.
        let new_head = self.next[i];
        let entity = self.payload[i].take();
        match new_head {
            Some(n) => self.prev[n.index()] = None,
            None => self.tail = None,
        }
        self.head = new_head;
        self.release(head);
        entity
    }
}

impl<T: Identified> IndexedQueue<T> {
    /// Append `entity` at the tail.
    ///
    /// Returns [`Enqueued::AlreadyPresent`] without touching the queue if
    /// an entity with the same identity is resident; the argument is
    /// dropped and the resident entity keeps its place.
    ///
    /// # Errors
    ///
    /// Hands the entity back inside [`Rejected`] when the identity is not
    /// below [`identity_bound`](Self::identity_bound) or when every slot
    /// is occupied. The queue is unchanged in both cases.
    pub fn enqueue(&mut self, entity: T) -> Result<Enqueued, Rejected<T>> {
        let identity = entity.identity();
        if identity.0 >= self.config.identity_bound {
            debug!(
                %identity,
                bound = self.config.identity_bound,
                "enqueue rejected: identity out of range"
            );
            return Err(Rejected::new(
                entity,
                QueueError::IdentityOutOfRange {
                    identity,
                    bound: self.config.identity_bound,
                },
            ));
        }
        let full = QueueError::CapacityExceeded {
            capacity: self.config.capacity,
        };
        if self.is_full() {
            debug!(
                %identity,
                capacity = self.config.capacity,
                "enqueue rejected: queue full"
            );
            return Err(Rejected::new(entity, full));
        }
        if let Some(slot) = self.lookup[identity.index()] {
            trace!(%identity, %slot, "enqueue skipped: already resident");
            return Ok(Enqueued::AlreadyPresent(slot));
        }
        debug_assert!(self.free.is_some(), "free list empty below capacity");
        let Some(slot) = self.free else {
            return Err(Rejected::new(entity, full));
        };

        let i = slot.index();
        self.free = self.next[i];
        self.payload[i] = Some(entity);
        self.lookup[identity.index()] = Some(slot);

        self.prev[i] = self.tail;
        match self.tail {
            Some(t) => self.next[t.index()] = Some(slot),
            None => self.head = Some(slot),
        }
        self.next[i] = None;
        self.tail = Some(slot);
        self.len += 1;

        trace!(%identity, %slot, len = self.len, "enqueued");
        Ok(Enqueued::Inserted(slot))
    }

    /// Remove and return the entity at the front, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let entity = self.unlink_head(head)?;
        let identity = entity.identity();
        if let Some(entry) = self.lookup.get_mut(identity.index()) {
            *entry = None;
        }
        trace!(%identity, slot = %head, len = self.len, "dequeued");
        Some(entity)
    }

    /// Remove the resident entity sharing `entity`'s identity, wherever it
    /// sits in the queue.
    ///
    /// Returns the removed entity, or `None` (with no change) if nothing
    /// with that identity is resident.
    pub fn remove<E: Identified + ?Sized>(&mut self, entity: &E) -> Option<T> {
        self.remove_identity(entity.identity())
    }

    /// Remove the resident entity with `identity`, wherever it sits in the
    /// queue.
    pub fn remove_identity(&mut self, identity: Identity) -> Option<T> {
        let slot = self.lookup.get_mut(identity.index())?.take()?;

        if Some(slot) == self.head {
            let entity = self.unlink_head(slot);
            trace!(%identity, %slot, len = self.len, "removed front");
            return entity;
        }

        // Not the head, so at least two entities are resident and `before`
        // is always present.
        let i = slot.index();
        let before = self.prev[i];
        let after = self.next[i];

        if Some(slot) == self.tail {
            if let Some(b) = before {
                self.next[b.index()] = None;
            }
            self.tail = before;
        } else {
            if let Some(b) = before {
                self.next[b.index()] = after;
            }
            if let Some(a) = after {
                self.prev[a.index()] = before;
            }
        }

        let entity = self.payload[i].take();
        self.release(slot);
        trace!(%identity, %slot, len = self.len, "removed");
        entity
    }

    /// Dequeue every resident entity in FIFO order.
    ///
    /// Entities not consumed before the iterator is dropped are dropped
    /// with it, leaving the queue empty.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }
}

impl<'a, T> IntoIterator for &'a IndexedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Identified> IntoIterator for IndexedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Items<'a, T>(&'a IndexedQueue<T>);

        impl<T: fmt::Debug> fmt::Debug for Items<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.iter()).finish()
            }
        }

        f.debug_struct("IndexedQueue")
            .field("len", &self.len)
            .field("capacity", &self.config.capacity)
            .field("items", &Items(self))
            .finish()
    }
}
