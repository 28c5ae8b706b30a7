//! Signal direction as declared in a STIL `Signals` block.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StilError;

/// Whether a signal is driven by the tester or compared by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Tester drives the pin (`In`).
    Input,
    /// Tester compares the pin (`Out`).
    Output,
}

impl Direction {
    /// Returns the STIL keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Input => "In",
            Direction::Output => "Out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Direction {
    type Err = StilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In" => Ok(Direction::Input),
            "Out" => Ok(Direction::Output),
            _ => Err(StilError::UnknownEnumValue {
                kind: "signal direction",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keywords() {
        assert_eq!("In".parse::<Direction>().unwrap(), Direction::Input);
        assert_eq!("Out".parse::<Direction>().unwrap(), Direction::Output);
    }

    #[test]
    fn inout_is_unknown() {
        let err = "InOut".parse::<Direction>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown signal direction 'InOut'"
        );
    }

    #[test]
    fn display_roundtrip() {
        for dir in [Direction::Input, Direction::Output] {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
    }
}
