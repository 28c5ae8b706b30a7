//! Opaque identifiers for registry entries owned by a [`StilTest`](crate::StilTest).

use serde::{Deserialize, Serialize};

/// Index of a [`Signal`](crate::Signal) in its test's signal registry.
///
/// Signal groups, waveforms and test vectors refer to signals through this
/// identifier instead of holding the signal itself.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SignalId(u32);

impl SignalId {
    /// Creates a `SignalId` from a raw `u32` value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` value of this `SignalId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a [`SignalGroup`](crate::SignalGroup) in its test's group registry.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct GroupId(u32);

impl GroupId {
    /// Creates a `GroupId` from a raw `u32` value.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw `u32` value of this `GroupId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
