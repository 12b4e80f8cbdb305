//! Canonical fixtures shared by unit, integration and example code.

use slotline_arena::QueueConfig;

use crate::Subject;

/// The four demo subjects, identities 1 through 4.
pub fn demo_subjects() -> [Subject; 4] {
    [
        Subject::new(1, "Aaron"),
        Subject::new(2, "Baron"),
        Subject::new(3, "Cauron"),
        Subject::new(4, "Dareon"),
    ]
}

/// Four slots with an identity table one entry wider, so the demo
/// subjects (identities 1..=4) all fit.
pub fn demo_config() -> QueueConfig {
    QueueConfig::new(4).with_identity_bound(5)
}
