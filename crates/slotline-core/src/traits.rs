//! The single trait the queue needs from its payload type.

use crate::id::Identity;

/// An entity carrying a unique identity.
///
/// The queue never compares payloads by value; it reads the identity and
/// nothing else. Two co-resident entities must not share an identity, and
/// an entity's identity must not change while it is resident.
pub trait Identified {
    /// The entity's identity.
    fn identity(&self) -> Identity;
}

impl Identified for Identity {
    fn identity(&self) -> Identity {
        *self
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn identity(&self) -> Identity {
        (**self).identity()
    }
}

impl<T: Identified + ?Sized> Identified for Box<T> {
    fn identity(&self) -> Identity {
        (**self).identity()
    }
}
