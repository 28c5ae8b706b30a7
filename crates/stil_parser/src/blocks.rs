//! The six parse stages, run in file order over one [`Cursor`].
//!
//! Every stage seeks its opening marker, decodes the block and leaves the
//! cursor after it. Errors raised while decoding a line are located at that
//! line.

use stil_common::{Condition, Direction, EventValue, StilError, StilResult, TimeUnit};
use stil_model::StilTest;
use tracing::debug;

use crate::cursor::Cursor;
use crate::tokens::{duration, first_quoted, is_block_header, number_after, pieces, quoted};

/// `Title "<name>";`
pub(crate) fn test_name(cursor: &mut Cursor<'_>, test: &mut StilTest) -> StilResult<()> {
    let line = cursor.seek("`Title` statement", |l| title_text(l).is_some())?;
    let name = title_text(line.trimmed())
        .map(first_quoted)
        .transpose()
        .map_err(|e| line.locate(e))?
        .flatten()
        .ok_or_else(|| line.locate(StilError::malformed("missing quoted test name after `Title`")))?;
    test.set_name(name).map_err(|e| line.locate(e))?;
    debug!(test_name = name, "parsed test name");
    Ok(())
}

fn title_text(line: &str) -> Option<&str> {
    let pos = line.find("Title")?;
    let rest = &line[pos + "Title".len()..];
    rest.starts_with(|c: char| c.is_whitespace() || c == '"')
        .then_some(rest)
}

/// `Signals { "a" In; "b" Out; ... }`
pub(crate) fn signals(cursor: &mut Cursor<'_>, test: &mut StilTest) -> StilResult<()> {
    cursor.seek("`Signals {`", |l| is_block_header(l, "Signals"))?;
    let mut count = 0usize;
    while let Some(line) = cursor.block_line("Signals")? {
        for entry in pieces(line.trimmed(), ';') {
            signal_entry(entry, test).map_err(|e| line.locate(e))?;
            count += 1;
        }
    }
    debug!(count, "parsed Signals block");
    Ok(())
}

fn signal_entry(entry: &str, test: &mut StilTest) -> StilResult<()> {
    let name = first_quoted(entry)?
        .ok_or_else(|| StilError::malformed(format!("missing quoted signal name in '{entry}'")))?;
    let rest = entry
        .splitn(3, '"')
        .nth(2)
        .unwrap_or_default();
    let direction: Direction = rest
        .split_whitespace()
        .next()
        .ok_or_else(|| StilError::malformed(format!("missing direction for signal '{name}'")))?
        .parse()?;
    test.add_signal(name, direction)?;
    Ok(())
}

/// `SignalGroups { <name> = '"a" + "b"'; ... }`
pub(crate) fn signal_groups(cursor: &mut Cursor<'_>, test: &mut StilTest) -> StilResult<()> {
    cursor.seek("`SignalGroups {`", |l| is_block_header(l, "SignalGroups"))?;
    let mut count = 0usize;
    while let Some(line) = cursor.block_line("SignalGroups")? {
        signal_group_line(line.trimmed(), test).map_err(|e| line.locate(e))?;
        count += 1;
    }
    debug!(count, "parsed SignalGroups block");
    Ok(())
}

fn signal_group_line(text: &str, test: &mut StilTest) -> StilResult<()> {
    let (name, members) = text
        .split_once('=')
        .ok_or_else(|| StilError::malformed("expected `<group> = <signals>;`"))?;
    let name = name.trim().trim_matches('"');
    if name.is_empty() {
        return Err(StilError::malformed("missing signal group name"));
    }
    let members = quoted(members)?;
    if members.is_empty() {
        return Err(StilError::malformed(format!(
            "signal group '{name}' lists no signals"
        )));
    }
    test.add_signal_group(name, &members)?;
    Ok(())
}

/// `Timing <name> {` followed, possibly a few lines later, by
/// `Period '<n><unit>';`.
pub(crate) fn waveform_table(cursor: &mut Cursor<'_>, test: &mut StilTest) -> StilResult<()> {
    cursor.seek("`Timing` block", |l| {
        l.starts_with("Timing") && l.ends_with('{')
    })?;
    let line = cursor.seek("`Period` statement", |l| l.starts_with("Period"))?;
    let (period, unit) = period(line.trimmed()).map_err(|e| line.locate(e))?;
    test.set_waveform_table(period, unit)
        .map_err(|e| line.locate(e))?;
    debug!(period, %unit, "parsed waveform table period");
    Ok(())
}

fn period(text: &str) -> StilResult<(u64, TimeUnit)> {
    let value = text
        .trim_start_matches("Period")
        .trim()
        .trim_end_matches(';')
        .trim()
        .trim_matches('\'');
    duration(value)
}

/// `Waveforms { <group> { <conds> { '<ts>' <v>[/<v>]; ... }} ... }`
pub(crate) fn waveforms(cursor: &mut Cursor<'_>, test: &mut StilTest) -> StilResult<()> {
    cursor.seek("`Waveforms {`", |l| is_block_header(l, "Waveforms"))?;
    let unit = test
        .waveform_table()
        .map(|t| t.unit())
        .ok_or_else(|| StilError::malformed("`Waveforms` block without a waveform table"))?;
    let mut count = 0usize;
    while let Some(line) = cursor.block_line("Waveforms")? {
        count += waveform_line(line.trimmed(), unit, test).map_err(|e| line.locate(e))?;
    }
    debug!(bindings = count, "parsed Waveforms block");
    Ok(())
}

fn waveform_line(text: &str, unit: TimeUnit, test: &mut StilTest) -> StilResult<usize> {
    let segments: Vec<&str> = pieces(text, '{').collect();
    let &[group, codes, body] = segments.as_slice() else {
        return Err(StilError::malformed(format!(
            "expected `<group> {{ <conditions> {{ <events> }}}}`, found {} segments",
            segments.len()
        )));
    };
    let conditions = codes
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(Condition::from_code)
        .collect::<StilResult<Vec<_>>>()?;

    let mut count = 0usize;
    for event in pieces(body.trim_end_matches(|c: char| c == '}' || c.is_whitespace()), ';') {
        let (timestamp, values) = waveform_event(event, unit)?;
        test.add_waveform(group, &conditions, timestamp, &values)?;
        count += 1;
    }
    if count == 0 {
        return Err(StilError::malformed(format!(
            "waveform for signal group '{group}' has no timed events"
        )));
    }
    Ok(count)
}

/// `'<ts><unit>' <v>[/<v>...]`
fn waveform_event(event: &str, unit: TimeUnit) -> StilResult<(u64, Vec<EventValue>)> {
    let mut parts = event.splitn(3, '\'');
    let (Some(_), Some(stamp), Some(values)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(StilError::malformed(format!(
            "missing quoted timestamp in '{event}'"
        )));
    };
    let (timestamp, stamp_unit) = duration(stamp)?;
    if stamp_unit != unit {
        return Err(StilError::malformed(format!(
            "timestamp '{stamp}' does not use the table unit '{unit}'"
        )));
    }
    let values = pieces(values, '/')
        .map(|code| {
            let mut chars = code.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => EventValue::from_code(c),
                _ => Err(StilError::UnknownEnumValue {
                    kind: "event value",
                    value: code.to_string(),
                }),
            }
        })
        .collect::<StilResult<Vec<_>>>()?;
    if values.is_empty() {
        return Err(StilError::malformed(format!(
            "missing event value after '{stamp}'"
        )));
    }
    Ok((timestamp, values))
}

/// The pattern stream: `TesterCycle:<n>` markers and `V { ... }` blocks, to
/// the end of input.
pub(crate) fn test_vectors(cursor: &mut Cursor<'_>, test: &mut StilTest) -> StilResult<()> {
    let mut cycle = 0u64;
    let mut assignments = 0usize;
    while let Some(line) = cursor.next_line() {
        let text = line.trimmed();
        if let Some(n) = number_after(text, "TesterCycle:").map_err(|e| line.locate(e))? {
            cycle = n;
        }
        let Some(rest) = vector_body(text) else {
            continue;
        };
        match rest.rfind('}') {
            Some(close) => {
                for assignment in pieces(&rest[..close], ';') {
                    vector_assignment(cycle, assignment, test).map_err(|e| line.locate(e))?;
                    assignments += 1;
                }
            }
            None => {
                for assignment in pieces(rest, ';') {
                    vector_assignment(cycle, assignment, test).map_err(|e| line.locate(e))?;
                    assignments += 1;
                }
                while let Some(inner) = cursor.block_line("V")? {
                    let text = inner.trimmed();
                    let (body, closed) = match text.strip_suffix('}') {
                        Some(body) => (body, true),
                        None => (text, false),
                    };
                    for assignment in pieces(body, ';') {
                        vector_assignment(cycle, assignment, test)
                            .map_err(|e| inner.locate(e))?;
                        assignments += 1;
                    }
                    if closed {
                        break;
                    }
                }
            }
        }
    }
    debug!(
        assignments,
        cycles = test.test_vectors().count(),
        "parsed pattern stream"
    );
    Ok(())
}

/// Text after the `{` of a `V {` line.
fn vector_body(line: &str) -> Option<&str> {
    line.strip_prefix('V')?.trim_start().strip_prefix('{')
}

fn vector_assignment(cycle: u64, assignment: &str, test: &mut StilTest) -> StilResult<()> {
    let (group, values) = assignment
        .split_once('=')
        .ok_or_else(|| StilError::malformed(format!("expected `<group> = <values>`, found '{assignment}'")))?;
    let (group, values) = (group.trim(), values.trim());
    if group.is_empty() {
        return Err(StilError::malformed("missing signal group name in vector"));
    }
    if values.is_empty() {
        return Err(StilError::malformed(format!(
            "missing values for signal group '{group}'"
        )));
    }
    test.add_test_vector(cycle, group, values)
}
