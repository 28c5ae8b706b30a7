//! Time units accepted in STIL `Period` and timestamp tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StilError;

/// Femtoseconds per picosecond.
pub const FS_PER_PS: u64 = 1_000;
/// Femtoseconds per nanosecond.
pub const FS_PER_NS: u64 = 1_000_000;
/// Femtoseconds per microsecond.
pub const FS_PER_US: u64 = 1_000_000_000;
/// Femtoseconds per millisecond.
pub const FS_PER_MS: u64 = 1_000_000_000_000;

/// The unit attached to a waveform table period and its timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// Milliseconds (`ms`).
    Ms,
    /// Microseconds (`us`).
    Us,
    /// Nanoseconds (`ns`).
    Ns,
    /// Picoseconds (`ps`).
    Ps,
    /// Femtoseconds (`fs`).
    Fs,
}

impl TimeUnit {
    /// All units, longest first.
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Ms,
        TimeUnit::Us,
        TimeUnit::Ns,
        TimeUnit::Ps,
        TimeUnit::Fs,
    ];

    /// Returns the STIL suffix for this unit.
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Ms => "ms",
            TimeUnit::Us => "us",
            TimeUnit::Ns => "ns",
            TimeUnit::Ps => "ps",
            TimeUnit::Fs => "fs",
        }
    }

    /// Returns the number of femtoseconds in one unit.
    pub fn fs_per_unit(self) -> u64 {
        match self {
            TimeUnit::Ms => FS_PER_MS,
            TimeUnit::Us => FS_PER_US,
            TimeUnit::Ns => FS_PER_NS,
            TimeUnit::Ps => FS_PER_PS,
            TimeUnit::Fs => 1,
        }
    }

    /// Converts a magnitude expressed in this unit to femtoseconds.
    ///
    /// Returns `None` on overflow.
    pub fn to_fs(self, magnitude: u64) -> Option<u64> {
        magnitude.checked_mul(self.fs_per_unit())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for TimeUnit {
    type Err = StilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.suffix() == s)
            .ok_or_else(|| StilError::UnknownEnumValue {
                kind: "time unit",
                value: s.to_string(),
            })
    }
}
