//! Signals and signal groups.

use serde::Serialize;
use stil_common::{Direction, StilError, StilResult};

use crate::ids::SignalId;

/// A named tester pin with a fixed direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Signal {
    name: String,
    direction: Direction,
}

impl Signal {
    /// Creates a signal.
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }

    /// The signal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the tester drives or compares this signal.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// An ordered collection of same-direction signals.
///
/// The group's direction is taken from its first member; every later
/// member must agree with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignalGroup {
    name: String,
    members: Vec<SignalId>,
    direction: Option<Direction>,
}

impl SignalGroup {
    /// Creates an empty group with no direction yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            direction: None,
        }
    }

    /// The group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member signals, in declaration order.
    pub fn members(&self) -> &[SignalId] {
        &self.members
    }

    /// The shared direction of the members, or `None` for an empty group.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Whether `id` is a member of this group.
    pub fn contains(&self, id: SignalId) -> bool {
        self.members.contains(&id)
    }

    /// Number of member signals.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Appends a member signal.
    ///
    /// # Errors
    ///
    /// [`StilError::DuplicateDefinition`] if the signal is already a member,
    /// [`StilError::DirectionMismatch`] if its direction differs from the
    /// group's.
    pub fn push(&mut self, id: SignalId, signal: &Signal) -> StilResult<()> {
        if self.contains(id) {
            return Err(StilError::DuplicateDefinition {
                what: "group member",
                name: format!("{}.{}", self.name, signal.name()),
            });
        }
        let direction = *self.direction.get_or_insert(signal.direction());
        if direction != signal.direction() {
            return Err(StilError::DirectionMismatch(format!(
                "cannot add {} signal '{}' to {} group '{}'",
                signal.direction(),
                signal.name(),
                direction,
                self.name
            )));
        }
        self.members.push(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> Signal {
        Signal::new(name, Direction::Input)
    }

    #[test]
    fn first_member_fixes_direction() {
        let mut group = SignalGroup::new("bus");
        assert_eq!(group.direction(), None);
        group.push(SignalId::from_raw(0), &input("a")).unwrap();
        assert_eq!(group.direction(), Some(Direction::Input));
        group.push(SignalId::from_raw(1), &input("b")).unwrap();
        assert_eq!(
            group.members(),
            &[SignalId::from_raw(0), SignalId::from_raw(1)]
        );
    }

    #[test]
    fn mixed_directions_rejected() {
        let mut group = SignalGroup::new("bus");
        group.push(SignalId::from_raw(0), &input("a")).unwrap();
        let err = group
            .push(SignalId::from_raw(1), &Signal::new("q", Direction::Output))
            .unwrap_err();
        assert!(matches!(err, StilError::DirectionMismatch(_)));
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn duplicate_member_rejected() {
        let mut group = SignalGroup::new("bus");
        group.push(SignalId::from_raw(0), &input("a")).unwrap();
        let err = group.push(SignalId::from_raw(0), &input("a")).unwrap_err();
        assert_eq!(err.to_string(), "duplicate group member 'bus.a'");
    }

    #[test]
    fn empty_group_has_no_members() {
        let group = SignalGroup::new("empty");
        assert!(group.is_empty());
        assert!(!group.contains(SignalId::from_raw(0)));
    }
}
