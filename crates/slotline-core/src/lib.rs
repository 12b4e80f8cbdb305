//! Core types and traits for the slotline queue.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: entity and slot
//! identifiers, the [`Identified`] trait through which the queue reads
//! an entity's identity, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::{ConfigError, QueueError};
pub use id::{Identity, SlotIndex};
pub use traits::Identified;
