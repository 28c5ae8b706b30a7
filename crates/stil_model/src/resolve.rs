//! Expansion of per-cycle logical values into timed test-vector events.

use stil_common::{Condition, EventValue, StilError, StilResult};

use crate::ids::SignalId;
use crate::test::StilTest;
use crate::vector::TestVector;

impl StilTest {
    /// Resolves one vector assignment, `group_name = values`, for
    /// `tester_cycle` and merges the resulting events into that cycle's
    /// [`TestVector`].
    ///
    /// `values` holds one condition code per member of the group, in group
    /// order. Each code is decoded against the group's direction and
    /// expanded through the waveform that owns the member signal (see
    /// [`Waveform::resolve`](crate::Waveform::resolve)). The vector for the
    /// cycle is created on first use; events already recorded at a
    /// timestamp are kept and new ones appended after them.
    ///
    /// Nothing is recorded unless the whole assignment resolves.
    ///
    /// # Errors
    ///
    /// - [`StilError::UndefinedReference`] for an unknown group.
    /// - [`StilError::InvalidDirection`] for a group without direction.
    /// - [`StilError::MalformedInput`] without a waveform table, or when the
    ///   value count differs from the member count.
    /// - [`StilError::UnknownEnumValue`] for a code outside the group's
    ///   direction alphabet.
    /// - [`StilError::UnresolvedSignal`] for a member no waveform covers.
    pub fn add_test_vector(
        &mut self,
        tester_cycle: u64,
        group_name: &str,
        values: &str,
    ) -> StilResult<()> {
        let group_id = self.require_group(group_name)?;
        let group = &self.groups[group_id.index()];
        let direction = group
            .direction()
            .ok_or_else(|| StilError::InvalidDirection(group_name.to_string()))?;
        let table = self.table.as_ref().ok_or_else(|| {
            StilError::malformed(format!(
                "test vector for signal group '{group_name}' precedes the waveform table"
            ))
        })?;

        let conditions = values
            .chars()
            .map(|c| Condition::for_direction(c, direction))
            .collect::<StilResult<Vec<_>>>()?;
        if conditions.len() != group.len() {
            return Err(StilError::malformed(format!(
                "signal group '{group_name}' has {} signals but {} values were given",
                group.len(),
                conditions.len()
            )));
        }

        let mut events: Vec<(u64, SignalId, EventValue)> = Vec::new();
        for (&signal, &condition) in group.members().iter().zip(&conditions) {
            let waveform = table.waveform_for_signal(signal).ok_or_else(|| {
                StilError::UnresolvedSignal(self.signals[signal.index()].name().to_string())
            })?;
            events.extend(
                waveform
                    .resolve(condition)?
                    .into_iter()
                    .map(|(timestamp, value)| (timestamp, signal, value)),
            );
        }

        let (period, unit) = (table.period(), table.unit());
        let vector = self
            .vectors
            .entry(tester_cycle)
            .or_insert_with(|| TestVector::new(tester_cycle, period, unit));
        for (timestamp, signal, value) in events {
            vector.record(timestamp, signal, value);
        }
        Ok(())
    }
}
