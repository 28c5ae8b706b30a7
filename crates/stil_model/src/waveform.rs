//! Per-group waveform definitions and their resolution into timed events.
//!
//! A [`Waveform`] belongs to one signal group and records which timing
//! conditions the group understands and which event values occur at which
//! offsets inside the table period. Input and output waveforms share the
//! same interface ([`recognize`](Waveform::recognize), [`bind`](Waveform::bind),
//! [`resolve`](Waveform::resolve)) but carry differently typed timelines,
//! selected by [`Shape`].

use std::collections::BTreeMap;

use serde::Serialize;
use stil_common::{
    CompareCondition, CompareValue, Condition, Direction, DriveCondition, EventValue, ForceValue,
    StilError, StilResult, TimeUnit,
};

use crate::ids::GroupId;

/// Decides which candidate value a condition selects when a timestamp holds
/// more than one value.
trait Pairing<V> {
    fn pairs(self, value: V) -> bool;
}

impl Pairing<ForceValue> for DriveCondition {
    fn pairs(self, value: ForceValue) -> bool {
        self.pairs_with(value)
    }
}

impl Pairing<CompareValue> for CompareCondition {
    fn pairs(self, value: CompareValue) -> bool {
        self.pairs_with(value)
    }
}

/// Recognized conditions and timestamp bindings of one direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Timeline<C, V> {
    conditions: Vec<C>,
    bindings: BTreeMap<u64, Vec<V>>,
}

impl<C, V> Default for Timeline<C, V> {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            bindings: BTreeMap::new(),
        }
    }
}

impl<C: Copy + PartialEq, V: Copy> Timeline<C, V> {
    /// Recognized conditions, in first-registration order.
    pub fn conditions(&self) -> &[C] {
        &self.conditions
    }

    /// Timestamp to bound values, ascending by timestamp.
    pub fn bindings(&self) -> &BTreeMap<u64, Vec<V>> {
        &self.bindings
    }

    fn recognize(&mut self, condition: C) {
        if !self.conditions.contains(&condition) {
            self.conditions.push(condition);
        }
    }

    fn bind(&mut self, timestamp: u64, value: V) {
        self.bindings.entry(timestamp).or_default().push(value);
    }

    fn resolve(&self, condition: C) -> Vec<(u64, V)>
    where
        C: Pairing<V>,
    {
        let mut events = Vec::new();
        for &recognized in self.conditions.iter().filter(|&&c| c == condition) {
            for (&timestamp, values) in &self.bindings {
                match values.as_slice() {
                    [single] => events.push((timestamp, *single)),
                    candidates => events.extend(
                        candidates
                            .iter()
                            .filter(|&&value| recognized.pairs(value))
                            .map(|&value| (timestamp, value)),
                    ),
                }
            }
        }
        events
    }
}

/// The direction-specific body of a [`Waveform`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Shape {
    /// Drive conditions resolving to force values.
    Input(Timeline<DriveCondition, ForceValue>),
    /// Compare conditions resolving to compare values.
    Output(Timeline<CompareCondition, CompareValue>),
}

/// The waveform of one signal group inside the waveform table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Waveform {
    group: GroupId,
    period: u64,
    unit: TimeUnit,
    shape: Shape,
}

impl Waveform {
    /// Creates an empty waveform for a group of the given direction.
    pub fn new(group: GroupId, direction: Direction, period: u64, unit: TimeUnit) -> Self {
        let shape = match direction {
            Direction::Input => Shape::Input(Timeline::default()),
            Direction::Output => Shape::Output(Timeline::default()),
        };
        Self {
            group,
            period,
            unit,
            shape,
        }
    }

    /// The owning signal group.
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// The period every timestamp is bounded by.
    pub fn period(&self) -> u64 {
        self.period
    }

    /// The unit of the period and timestamps.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// The direction of the owning group.
    pub fn direction(&self) -> Direction {
        match self.shape {
            Shape::Input(_) => Direction::Input,
            Shape::Output(_) => Direction::Output,
        }
    }

    /// The typed timeline.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Recognized conditions, in first-registration order.
    pub fn conditions(&self) -> Vec<Condition> {
        match &self.shape {
            Shape::Input(t) => t.conditions().iter().map(|&c| Condition::Drive(c)).collect(),
            Shape::Output(t) => t.conditions().iter().map(|&c| Condition::Compare(c)).collect(),
        }
    }

    /// Timestamp bindings, ascending by timestamp, values in binding order.
    pub fn bindings(&self) -> Vec<(u64, Vec<EventValue>)> {
        match &self.shape {
            Shape::Input(t) => t
                .bindings()
                .iter()
                .map(|(&ts, vs)| (ts, vs.iter().map(|&v| EventValue::Force(v)).collect()))
                .collect(),
            Shape::Output(t) => t
                .bindings()
                .iter()
                .map(|(&ts, vs)| (ts, vs.iter().map(|&v| EventValue::Compare(v)).collect()))
                .collect(),
        }
    }

    /// Registers `condition` as valid for this waveform.
    ///
    /// Registering the same condition twice is a no-op.
    ///
    /// # Errors
    ///
    /// [`StilError::DirectionMismatch`] if the condition belongs to the other
    /// direction.
    pub fn recognize(&mut self, condition: Condition) -> StilResult<()> {
        let direction = self.direction();
        match (&mut self.shape, condition) {
            (Shape::Input(t), Condition::Drive(c)) => t.recognize(c),
            (Shape::Output(t), Condition::Compare(c)) => t.recognize(c),
            (_, condition) => {
                return Err(StilError::DirectionMismatch(format!(
                    "timing condition '{condition}' is not valid for a waveform of direction {direction}"
                )))
            }
        }
        Ok(())
    }

    /// Appends `value` to the values bound at `timestamp`.
    ///
    /// # Errors
    ///
    /// [`StilError::OutOfPeriod`] if `timestamp` exceeds the period,
    /// [`StilError::DirectionMismatch`] if the value belongs to the other
    /// direction.
    pub fn bind(&mut self, timestamp: u64, value: EventValue) -> StilResult<()> {
        if timestamp > self.period {
            return Err(StilError::OutOfPeriod {
                timestamp,
                period: self.period,
                unit: self.unit,
            });
        }
        let direction = self.direction();
        match (&mut self.shape, value) {
            (Shape::Input(t), EventValue::Force(v)) => t.bind(timestamp, v),
            (Shape::Output(t), EventValue::Compare(v)) => t.bind(timestamp, v),
            (_, value) => {
                return Err(StilError::DirectionMismatch(format!(
                    "event value '{value}' is not valid for a waveform of direction {direction}"
                )))
            }
        }
        Ok(())
    }

    /// Expands one per-cycle condition into `(timestamp, value)` events.
    ///
    /// For every recognized condition equal to `condition`, each timestamp
    /// binding contributes its value unconditionally when it holds a single
    /// value, and otherwise contributes every candidate value the condition
    /// pairs with. Events come out ascending by timestamp.
    ///
    /// # Errors
    ///
    /// [`StilError::DirectionMismatch`] if the condition belongs to the other
    /// direction.
    pub fn resolve(&self, condition: Condition) -> StilResult<Vec<(u64, EventValue)>> {
        match (&self.shape, condition) {
            (Shape::Input(t), Condition::Drive(c)) => Ok(t
                .resolve(c)
                .into_iter()
                .map(|(ts, v)| (ts, EventValue::Force(v)))
                .collect()),
            (Shape::Output(t), Condition::Compare(c)) => Ok(t
                .resolve(c)
                .into_iter()
                .map(|(ts, v)| (ts, EventValue::Compare(v)))
                .collect()),
            (_, condition) => Err(StilError::DirectionMismatch(format!(
                "cannot resolve timing condition '{condition}' against a waveform of direction {}",
                self.direction()
            ))),
        }
    }
}
