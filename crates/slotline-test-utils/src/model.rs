//! An obviously-correct queue model for differential testing.

use indexmap::IndexMap;

use slotline_arena::QueueConfig;
use slotline_core::{Identified, Identity, QueueError};

/// Reference model of the slot queue built on an insertion-ordered map.
///
/// Follows the same outcome rules as the real queue (range check, then
/// capacity check, then duplicate check) but pays O(n) for removal.
pub struct ReferenceQueue<T> {
    config: QueueConfig,
    entries: IndexMap<Identity, T>,
}

impl<T: Identified> ReferenceQueue<T> {
    pub fn new(config: QueueConfig) -> Self {
        Self {
            config,
            entries: IndexMap::with_capacity(config.capacity as usize),
        }
    }

    /// Returns `Ok(true)` on insertion, `Ok(false)` if already resident.
    pub fn enqueue(&mut self, entity: T) -> Result<bool, QueueError> {
        let identity = entity.identity();
        if identity.0 >= self.config.identity_bound {
            return Err(QueueError::IdentityOutOfRange {
                identity,
                bound: self.config.identity_bound,
            });
        }
        if self.entries.len() == self.config.capacity as usize {
            return Err(QueueError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }
        if self.entries.contains_key(&identity) {
            return Ok(false);
        }
        self.entries.insert(identity, entity);
        Ok(true)
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.entries.shift_remove_index(0).map(|(_, v)| v)
    }

    pub fn remove(&mut self, identity: Identity) -> Option<T> {
        self.entries.shift_remove(&identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identity: Identity) -> bool {
        self.entries.contains_key(&identity)
    }

    pub fn front(&self) -> Option<&T> {
        self.entries.first().map(|(_, v)| v)
    }

    pub fn back(&self) -> Option<&T> {
        self.entries.last().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_keeps_fifo_and_removes_anywhere() {
        let mut model = ReferenceQueue::new(QueueConfig::new(4));
        for id in 0..4 {
            assert_eq!(model.enqueue(Identity(id)), Ok(true));
        }
        assert!(matches!(
            model.enqueue(Identity(0)),
            Err(QueueError::CapacityExceeded { capacity: 4 })
        ));
        assert_eq!(model.remove(Identity(2)), Some(Identity(2)));
        assert_eq!(model.enqueue(Identity(1)), Ok(false));
        assert_eq!(model.dequeue(), Some(Identity(0)));
        let rest: Vec<u32> = model.iter().map(|i| i.0).collect();
        assert_eq!(rest, vec![1, 3]);
    }
}
