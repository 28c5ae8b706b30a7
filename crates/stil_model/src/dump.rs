//! Deterministic, tab-indented text rendering of a [`StilTest`].
//!
//! The layout is stable for identical models, which makes it suitable for
//! golden-file comparisons:
//!
//! ```text
//! StilTest 'name'
//! 	signals:
//! 		a: In
//! 	signal groups:
//! 		ins (In): a b
//! 	waveform table: 100ns
//! 		waveform ins (In)
//! 			conditions: 0 1
//! 			'0ns': D/U
//! 	test vectors:
//! 		cycle 0
//! 			'0ns': a=U
//! ```

use std::fmt;

use crate::test::StilTest;
use crate::waveform::Waveform;

/// Renders the whole model.
pub fn render(test: &StilTest) -> String {
    Dump(test).to_string()
}

/// [`fmt::Display`] adapter producing the [`render`] output.
pub struct Dump<'a>(pub &'a StilTest);

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let test = self.0;
        writeln!(f, "StilTest '{}'", test.name().unwrap_or(""))?;

        writeln!(f, "\tsignals:")?;
        for signal in test.signals() {
            writeln!(f, "\t\t{}: {}", signal.name(), signal.direction())?;
        }

        writeln!(f, "\tsignal groups:")?;
        for group in test.groups() {
            let direction = group.direction().map_or("-", |d| d.keyword());
            writeln!(
                f,
                "\t\t{} ({direction}): {}",
                group.name(),
                test.member_names(group).join(" ")
            )?;
        }

        match test.waveform_table() {
            Some(table) => {
                writeln!(f, "\twaveform table: {}{}", table.period(), table.unit())?;
                for waveform in table.waveforms() {
                    write_waveform(f, test, waveform)?;
                }
            }
            None => writeln!(f, "\twaveform table: -")?,
        }

        writeln!(f, "\ttest vectors:")?;
        for vector in test.test_vectors() {
            writeln!(f, "\t\tcycle {}", vector.tester_cycle())?;
            for (timestamp, events) in vector.events() {
                let events: Vec<String> = events
                    .iter()
                    .map(|e| {
                        let name = test.signal(e.signal).map_or("?", |s| s.name());
                        format!("{name}={}", e.value)
                    })
                    .collect();
                writeln!(f, "\t\t\t'{timestamp}{}': {}", vector.unit(), events.join(" "))?;
            }
        }
        Ok(())
    }
}

fn write_waveform(f: &mut fmt::Formatter<'_>, test: &StilTest, waveform: &Waveform) -> fmt::Result {
    let group = test.group(waveform.group()).map_or("?", |g| g.name());
    writeln!(f, "\t\twaveform {group} ({})", waveform.direction())?;
    let conditions: Vec<String> = waveform.conditions().iter().map(ToString::to_string).collect();
    writeln!(f, "\t\t\tconditions: {}", conditions.join(" "))?;
    for (timestamp, values) in waveform.bindings() {
        let values: Vec<String> = values.iter().map(ToString::to_string).collect();
        writeln!(f, "\t\t\t'{timestamp}{}': {}", waveform.unit(), values.join("/"))?;
    }
    Ok(())
}
