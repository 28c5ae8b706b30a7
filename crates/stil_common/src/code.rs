//! Single-character timing condition and event value codes.
//!
//! Inputs are described by drive conditions (`0`, `1`, `N`) that resolve to
//! force values (`D`, `U`, `N`). Outputs are described by compare conditions
//! (`H`, `L`, `X`, `T`) that resolve to compare values sharing the same
//! alphabet. The two alphabets per role are disjoint, so a bare code is
//! enough to recover the variant and its direction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::direction::Direction;
use crate::error::StilError;

/// A per-cycle logical state for an input signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveCondition {
    /// Drive logic zero (`0`).
    Zero,
    /// Drive logic one (`1`).
    One,
    /// Leave the pin undriven (`N`).
    Unknown,
}

impl DriveCondition {
    /// Returns the STIL code character.
    pub fn code(self) -> char {
        match self {
            DriveCondition::Zero => '0',
            DriveCondition::One => '1',
            DriveCondition::Unknown => 'N',
        }
    }

    /// Decodes a STIL code character.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            '0' => Some(DriveCondition::Zero),
            '1' => Some(DriveCondition::One),
            'N' => Some(DriveCondition::Unknown),
            _ => None,
        }
    }

    /// Whether `value` is the edge this condition selects when a timestamp
    /// carries several candidate values.
    ///
    /// `N` selects no-force, `0` selects force-down, `1` selects force-up.
    pub fn pairs_with(self, value: ForceValue) -> bool {
        matches!(
            (self, value),
            (DriveCondition::Unknown, ForceValue::NoForce)
                | (DriveCondition::Zero, ForceValue::Down)
                | (DriveCondition::One, ForceValue::Up)
        )
    }
}

/// A per-cycle expected state for an output signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareCondition {
    /// Expect logic high (`H`).
    High,
    /// Expect logic low (`L`).
    Low,
    /// Do not compare (`X`).
    DontCare,
    /// Expect high impedance (`T`).
    HighImpedance,
}

impl CompareCondition {
    /// Returns the STIL code character.
    pub fn code(self) -> char {
        match self {
            CompareCondition::High => 'H',
            CompareCondition::Low => 'L',
            CompareCondition::DontCare => 'X',
            CompareCondition::HighImpedance => 'T',
        }
    }

    /// Decodes a STIL code character.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'H' => Some(CompareCondition::High),
            'L' => Some(CompareCondition::Low),
            'X' => Some(CompareCondition::DontCare),
            'T' => Some(CompareCondition::HighImpedance),
            _ => None,
        }
    }

    /// Compare conditions pair only with the value carrying the same code.
    pub fn pairs_with(self, value: CompareValue) -> bool {
        self.code() == value.code()
    }
}

/// An electrical edge applied to an input signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceValue {
    /// Force the pin up (`U`).
    Up,
    /// Force the pin down (`D`).
    Down,
    /// Release the pin (`N`).
    NoForce,
}

impl ForceValue {
    /// Returns the STIL code character.
    pub fn code(self) -> char {
        match self {
            ForceValue::Up => 'U',
            ForceValue::Down => 'D',
            ForceValue::NoForce => 'N',
        }
    }

    /// Decodes a STIL code character.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'U' => Some(ForceValue::Up),
            'D' => Some(ForceValue::Down),
            'N' => Some(ForceValue::NoForce),
            _ => None,
        }
    }
}

/// A compare strobe applied to an output signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareValue {
    /// Compare high (`H`).
    High,
    /// Compare low (`L`).
    Low,
    /// Mask the compare (`X`).
    DontCare,
    /// Compare high impedance (`T`).
    HighImpedance,
}

impl CompareValue {
    /// Returns the STIL code character.
    pub fn code(self) -> char {
        match self {
            CompareValue::High => 'H',
            CompareValue::Low => 'L',
            CompareValue::DontCare => 'X',
            CompareValue::HighImpedance => 'T',
        }
    }

    /// Decodes a STIL code character.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'H' => Some(CompareValue::High),
            'L' => Some(CompareValue::Low),
            'X' => Some(CompareValue::DontCare),
            'T' => Some(CompareValue::HighImpedance),
            _ => None,
        }
    }
}

/// A timing condition of either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Input-side drive condition.
    Drive(DriveCondition),
    /// Output-side compare condition.
    Compare(CompareCondition),
}

impl Condition {
    /// Decodes a condition code of either direction.
    pub fn from_code(c: char) -> Result<Self, StilError> {
        DriveCondition::from_code(c)
            .map(Condition::Drive)
            .or_else(|| CompareCondition::from_code(c).map(Condition::Compare))
            .ok_or_else(|| StilError::UnknownEnumValue {
                kind: "timing condition",
                value: c.to_string(),
            })
    }

    /// Decodes a condition code, accepting only the alphabet of `direction`.
    pub fn for_direction(c: char, direction: Direction) -> Result<Self, StilError> {
        let parsed = match direction {
            Direction::Input => DriveCondition::from_code(c).map(Condition::Drive),
            Direction::Output => CompareCondition::from_code(c).map(Condition::Compare),
        };
        parsed.ok_or_else(|| StilError::UnknownEnumValue {
            kind: match direction {
                Direction::Input => "drive condition",
                Direction::Output => "compare condition",
            },
            value: c.to_string(),
        })
    }

    /// The direction this condition applies to.
    pub fn direction(self) -> Direction {
        match self {
            Condition::Drive(_) => Direction::Input,
            Condition::Compare(_) => Direction::Output,
        }
    }

    /// Returns the STIL code character.
    pub fn code(self) -> char {
        match self {
            Condition::Drive(c) => c.code(),
            Condition::Compare(c) => c.code(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An event value of either direction, as bound to a waveform timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventValue {
    /// Input-side force value.
    Force(ForceValue),
    /// Output-side compare value.
    Compare(CompareValue),
}

impl EventValue {
    /// Decodes an event value code of either direction.
    pub fn from_code(c: char) -> Result<Self, StilError> {
        ForceValue::from_code(c)
            .map(EventValue::Force)
            .or_else(|| CompareValue::from_code(c).map(EventValue::Compare))
            .ok_or_else(|| StilError::UnknownEnumValue {
                kind: "event value",
                value: c.to_string(),
            })
    }

    /// The direction this value applies to.
    pub fn direction(self) -> Direction {
        match self {
            EventValue::Force(_) => Direction::Input,
            EventValue::Compare(_) => Direction::Output,
        }
    }

    /// Returns the STIL code character.
    pub fn code(self) -> char {
        match self {
            EventValue::Force(v) => v.code(),
            EventValue::Compare(v) => v.code(),
        }
    }
}

impl fmt::Display for EventValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
