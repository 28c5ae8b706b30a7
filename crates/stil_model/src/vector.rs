//! Resolved per-cycle test vectors.

use std::collections::BTreeMap;

use serde::Serialize;
use stil_common::{EventValue, TimeUnit};

use crate::ids::SignalId;

/// One resolved edge or compare strobe of a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    /// The signal the event applies to.
    pub signal: SignalId,
    /// The force or compare value.
    pub value: EventValue,
}

/// The resolved events of one tester cycle.
///
/// Events are keyed by their offset inside the cycle, in the unit of the
/// waveform table the vector was resolved against. Offsets iterate in
/// ascending order; events sharing an offset keep their emission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestVector {
    tester_cycle: u64,
    period: u64,
    unit: TimeUnit,
    events: BTreeMap<u64, Vec<Event>>,
}

impl TestVector {
    /// Creates an empty vector for `tester_cycle` against a table with the
    /// given period and unit.
    pub fn new(tester_cycle: u64, period: u64, unit: TimeUnit) -> Self {
        Self {
            tester_cycle,
            period,
            unit,
            events: BTreeMap::new(),
        }
    }

    /// The tester cycle number.
    pub fn tester_cycle(&self) -> u64 {
        self.tester_cycle
    }

    /// The period of the table this vector was resolved against.
    pub fn period(&self) -> u64 {
        self.period
    }

    /// The unit of every offset in this vector.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Events grouped by offset, ascending.
    pub fn events(&self) -> &BTreeMap<u64, Vec<Event>> {
        &self.events
    }

    /// Offsets holding at least one event, ascending.
    pub fn timestamps(&self) -> Vec<u64> {
        self.events.keys().copied().collect()
    }

    /// The events at `timestamp`, if any.
    pub fn events_at(&self, timestamp: u64) -> &[Event] {
        self.events.get(&timestamp).map_or(&[], Vec::as_slice)
    }

    /// Total number of events across all offsets.
    pub fn event_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    /// Whether no event was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Offset of `timestamp` from the start of the pattern:
    /// `tester_cycle * period + timestamp`, in the table unit.
    ///
    /// Returns `None` on overflow.
    pub fn absolute_time(&self, timestamp: u64) -> Option<u64> {
        self.tester_cycle
            .checked_mul(self.period)?
            .checked_add(timestamp)
    }

    /// [`absolute_time`](Self::absolute_time) converted to femtoseconds.
    pub fn absolute_fs(&self, timestamp: u64) -> Option<u64> {
        self.unit.to_fs(self.absolute_time(timestamp)?)
    }

    /// Appends an event at `timestamp`.
    pub fn record(&mut self, timestamp: u64, signal: SignalId, value: EventValue) {
        self.events
            .entry(timestamp)
            .or_default()
            .push(Event { signal, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stil_common::{CompareValue, ForceValue, FS_PER_NS};

    const UP: EventValue = EventValue::Force(ForceValue::Up);
    const HIGH: EventValue = EventValue::Compare(CompareValue::High);

    #[test]
    fn record_keeps_offsets_sorted() {
        let mut tv = TestVector::new(0, 100, TimeUnit::Ns);
        tv.record(50, SignalId::from_raw(0), UP);
        tv.record(0, SignalId::from_raw(1), HIGH);
        tv.record(25, SignalId::from_raw(0), UP);
        let offsets: Vec<u64> = tv.events().keys().copied().collect();
        assert_eq!(offsets, vec![0, 25, 50]);
        assert_eq!(tv.event_count(), 3);
    }

    #[test]
    fn record_appends_at_same_offset() {
        let mut tv = TestVector::new(3, 100, TimeUnit::Ns);
        tv.record(10, SignalId::from_raw(1), HIGH);
        tv.record(10, SignalId::from_raw(0), UP);
        assert_eq!(
            tv.events_at(10),
            &[
                Event { signal: SignalId::from_raw(1), value: HIGH },
                Event { signal: SignalId::from_raw(0), value: UP },
            ]
        );
        assert!(tv.events_at(11).is_empty());
    }

    #[test]
    fn absolute_time_offsets_by_cycle() {
        let tv = TestVector::new(3, 100, TimeUnit::Ns);
        assert_eq!(tv.absolute_time(20), Some(320));
        assert_eq!(tv.absolute_fs(20), Some(320 * FS_PER_NS));
    }

    #[test]
    fn absolute_time_overflow() {
        let tv = TestVector::new(u64::MAX, 100, TimeUnit::Ns);
        assert_eq!(tv.absolute_time(0), None);
        assert_eq!(tv.absolute_fs(0), None);
    }

    #[test]
    fn new_vector_is_empty() {
        let tv = TestVector::new(7, 10, TimeUnit::Ps);
        assert!(tv.is_empty());
        assert_eq!(tv.tester_cycle(), 7);
        assert_eq!(tv.period(), 10);
        assert_eq!(tv.unit(), TimeUnit::Ps);
    }
}
