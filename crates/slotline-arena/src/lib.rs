//! Fixed-capacity slot arena backing the slotline queue.
//!
//! Provides [`IndexedQueue`], a FIFO queue over a pre-allocated arena of
//! slots, with constant-time enqueue, dequeue and removal of any resident
//! entity by identity.
//!
//! # Architecture
//!
//! ```text
//! IndexedQueue<T>
//! ├── payload[C]   slot -> Option<T>
//! ├── next[C]      active-list successor | free-list successor
//! ├── prev[C]      active-list predecessor
//! ├── lookup[B]    identity -> slot
//! └── head / tail / free anchors
//! ```
//!
//! `C` is the configured capacity and `B` the identity bound (see
//! [`QueueConfig`]). Slots cycle `free -> occupied -> free` and are never
//! reallocated; the arena is sized once at construction.
//!
//! # Outcomes
//!
//! Only two conditions are errors, both reported by
//! [`IndexedQueue::enqueue`] through [`Rejected`]: a full arena and an
//! identity outside the lookup table. Dequeuing an empty queue, removing
//! an absent entity and re-enqueuing a resident one are ordinary outcomes
//! (`None`, `None` and [`Enqueued::AlreadyPresent`]).
//!
//! # Concurrency
//!
//! The queue is a plain single-owner value. Callers sharing it across
//! threads wrap the whole queue in one lock.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod iter;
pub mod queue;
mod validate;

// Public re-exports for the primary API surface.
pub use config::QueueConfig;
pub use error::{InvariantViolation, Rejected};
pub use iter::{Drain, IntoIter, Iter};
pub use queue::{Enqueued, IndexedQueue};
