//! The waveform table: the shared timing reference of a test.

use std::collections::HashMap;

use serde::Serialize;
use stil_common::{StilError, StilResult, TimeUnit};

use crate::ids::{GroupId, SignalId};
use crate::waveform::Waveform;

/// Period, unit and one [`Waveform`] per signal group.
///
/// Besides the waveforms, the table keeps a signal → waveform index filled
/// as waveforms are inserted, so that resolving a signal never scans the
/// groups. When a signal belongs to several waveform-bearing groups, the
/// waveform inserted first owns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WaveformTable {
    period: u64,
    unit: TimeUnit,
    waveforms: Vec<Waveform>,
    #[serde(skip)]
    by_group: HashMap<GroupId, usize>,
    #[serde(skip)]
    by_signal: HashMap<SignalId, usize>,
}

impl WaveformTable {
    /// Creates an empty table.
    ///
    /// # Errors
    ///
    /// [`StilError::MalformedInput`] if `period` is zero.
    pub fn new(period: u64, unit: TimeUnit) -> StilResult<Self> {
        if period == 0 {
            return Err(StilError::malformed("waveform table period must be positive"));
        }
        Ok(Self {
            period,
            unit,
            waveforms: Vec::new(),
            by_group: HashMap::new(),
            by_signal: HashMap::new(),
        })
    }

    /// The tester cycle period.
    pub fn period(&self) -> u64 {
        self.period
    }

    /// The unit of the period and every timestamp.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Waveforms in insertion order.
    pub fn waveforms(&self) -> &[Waveform] {
        &self.waveforms
    }

    /// The waveform owned by `group`, if any.
    pub fn waveform_for_group(&self, group: GroupId) -> Option<&Waveform> {
        self.by_group.get(&group).map(|&i| &self.waveforms[i])
    }

    pub(crate) fn waveform_for_group_mut(&mut self, group: GroupId) -> Option<&mut Waveform> {
        match self.by_group.get(&group) {
            Some(&i) => Some(&mut self.waveforms[i]),
            None => None,
        }
    }

    /// The waveform whose group contains `signal`, if any.
    pub fn waveform_for_signal(&self, signal: SignalId) -> Option<&Waveform> {
        self.by_signal.get(&signal).map(|&i| &self.waveforms[i])
    }

    /// Adds a waveform and indexes the members of its group.
    ///
    /// # Errors
    ///
    /// [`StilError::MalformedInput`] if the waveform's period or unit differ
    /// from the table's, [`StilError::DuplicateDefinition`] if the group
    /// already has a waveform.
    pub fn insert(&mut self, waveform: Waveform, members: &[SignalId]) -> StilResult<()> {
        if waveform.period() != self.period || waveform.unit() != self.unit {
            return Err(StilError::malformed(format!(
                "waveform period {}{} is incompatible with table period {}{}",
                waveform.period(),
                waveform.unit(),
                self.period,
                self.unit
            )));
        }
        if self.by_group.contains_key(&waveform.group()) {
            return Err(StilError::DuplicateDefinition {
                what: "waveform for signal group",
                name: waveform.group().as_raw().to_string(),
            });
        }
        let index = self.waveforms.len();
        self.by_group.insert(waveform.group(), index);
        for &signal in members {
            self.by_signal.entry(signal).or_insert(index);
        }
        self.waveforms.push(waveform);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stil_common::Direction;

    fn sig(i: u32) -> SignalId {
        SignalId::from_raw(i)
    }

    #[test]
    fn zero_period_rejected() {
        assert!(matches!(
            WaveformTable::new(0, TimeUnit::Ns),
            Err(StilError::MalformedInput(_))
        ));
    }

    #[test]
    fn insert_indexes_group_and_members() {
        let mut table = WaveformTable::new(100, TimeUnit::Ns).unwrap();
        let group = GroupId::from_raw(2);
        table
            .insert(Waveform::new(group, Direction::Input, 100, TimeUnit::Ns), &[sig(0), sig(1)])
            .unwrap();
        assert_eq!(table.waveform_for_group(group).unwrap().group(), group);
        assert_eq!(table.waveform_for_signal(sig(1)).unwrap().group(), group);
        assert!(table.waveform_for_signal(sig(5)).is_none());
    }

    #[test]
    fn first_waveform_owns_shared_signal() {
        let mut table = WaveformTable::new(100, TimeUnit::Ns).unwrap();
        let all = GroupId::from_raw(0);
        let sub = GroupId::from_raw(1);
        table
            .insert(Waveform::new(all, Direction::Input, 100, TimeUnit::Ns), &[sig(0), sig(1)])
            .unwrap();
        table
            .insert(Waveform::new(sub, Direction::Input, 100, TimeUnit::Ns), &[sig(1), sig(2)])
            .unwrap();
        assert_eq!(table.waveform_for_signal(sig(1)).unwrap().group(), all);
        assert_eq!(table.waveform_for_signal(sig(2)).unwrap().group(), sub);
    }

    #[test]
    fn incompatible_period_rejected() {
        let mut table = WaveformTable::new(100, TimeUnit::Ns).unwrap();
        let wf = Waveform::new(GroupId::from_raw(0), Direction::Input, 50, TimeUnit::Ns);
        assert!(matches!(
            table.insert(wf, &[]),
            Err(StilError::MalformedInput(_))
        ));
        let wf = Waveform::new(GroupId::from_raw(0), Direction::Input, 100, TimeUnit::Ps);
        assert!(table.insert(wf, &[]).is_err());
    }

    #[test]
    fn second_waveform_for_group_rejected() {
        let mut table = WaveformTable::new(10, TimeUnit::Us).unwrap();
        let group = GroupId::from_raw(0);
        table
            .insert(Waveform::new(group, Direction::Output, 10, TimeUnit::Us), &[])
            .unwrap();
        let err = table
            .insert(Waveform::new(group, Direction::Output, 10, TimeUnit::Us), &[])
            .unwrap_err();
        assert!(matches!(err, StilError::DuplicateDefinition { .. }));
        assert_eq!(table.waveforms().len(), 1);
    }
}
