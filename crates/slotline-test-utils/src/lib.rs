//! Test utilities, fixtures and a reference model for slotline development.
//!
//! Provides the [`Subject`] mock entity, the [`ReferenceQueue`] model that
//! property tests run in lockstep with the real queue, and
//! [`assert_queue_matches`] to compare the two.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod model;

use std::fmt;

use slotline_arena::IndexedQueue;
use slotline_core::{Identified, Identity};

pub use fixtures::{demo_config, demo_subjects};
pub use model::ReferenceQueue;

/// A named person waiting in a queue.
///
/// The name is opaque payload; only the identity is read by the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subject {
    id: Identity,
    name: String,
}

impl Subject {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id: Identity(id),
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Identified for Subject {
    fn identity(&self) -> Identity {
        self.id
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ID number: {}", self.name, self.id)
    }
}

/// Assert that `queue` holds exactly what `model` holds, in the same
/// order, and that the queue's internal invariants hold.
pub fn assert_queue_matches<T>(queue: &IndexedQueue<T>, model: &ReferenceQueue<T>)
where
    T: Identified + fmt::Debug + PartialEq,
{
    if let Err(violation) = queue.check_invariants() {
        panic!("invariant violated: {violation}; queue = {queue:?}");
    }
    assert_eq!(queue.len(), model.len(), "length differs from model");
    let actual: Vec<&T> = queue.iter().collect();
    let expected: Vec<&T> = model.iter().collect();
    assert_eq!(actual, expected, "contents differ from model");
    assert_eq!(queue.front(), model.front(), "front differs from model");
    assert_eq!(queue.back(), model.back(), "back differs from model");
    for id in 0..queue.identity_bound() {
        let identity = Identity(id);
        assert_eq!(
            queue.contains(identity),
            model.contains(identity),
            "membership of identity {identity} differs from model"
        );
    }
}
