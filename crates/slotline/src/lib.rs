//! slotline: an identity-indexed FIFO queue with O(1) removal by identity.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the slotline sub-crates. For most users, adding `slotline` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slotline::prelude::*;
//!
//! struct Patient {
//!     id: u32,
//! }
//!
//! impl Identified for Patient {
//!     fn identity(&self) -> Identity {
//!         Identity(self.id)
//!     }
//! }
//!
//! let mut waiting = IndexedQueue::new(3).unwrap();
//! for id in 0..3 {
//!     waiting.enqueue(Patient { id }).unwrap();
//! }
//!
//! // Full: the patient is handed back.
//! let turned_away = waiting.enqueue(Patient { id: 2 }).unwrap_err();
//! assert!(turned_away.is_full());
//!
//! // Patient 1 leaves the line early; no traversal needed.
//! assert!(waiting.remove_identity(Identity(1)).is_some());
//!
//! assert_eq!(waiting.dequeue().map(|p| p.id), Some(0));
//! assert_eq!(waiting.dequeue().map(|p| p.id), Some(2));
//! assert!(waiting.dequeue().is_none());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slotline-core` | Identities, slot indices, the `Identified` trait, errors |
//! | [`arena`] | `slotline-arena` | `IndexedQueue`, `QueueConfig`, iterators, invariant checks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slot arena and the queue itself (`slotline-arena`).
pub use slotline_arena as arena;

/// Identifiers, the `Identified` trait and error types (`slotline-core`).
pub use slotline_core as types;

pub use slotline_arena::{Enqueued, IndexedQueue, QueueConfig, Rejected};
pub use slotline_core::{ConfigError, Identified, Identity, QueueError, SlotIndex};

/// Common imports for typical usage.
///
/// ```rust
/// use slotline::prelude::*;
/// ```
pub mod prelude {
    pub use slotline_arena::{Enqueued, IndexedQueue, QueueConfig, Rejected};
    pub use slotline_core::{ConfigError, Identified, Identity, QueueError};
}
