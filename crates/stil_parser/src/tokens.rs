//! Small token extractors shared by the block stages.

use stil_common::{StilError, StilResult, TimeUnit};

/// Contents of the first `"..."` token in `s`.
///
/// # Errors
///
/// [`StilError::MalformedInput`] if `s` holds an unterminated quote.
pub(crate) fn first_quoted(s: &str) -> StilResult<Option<&str>> {
    Ok(quoted(s)?.into_iter().next())
}

/// Contents of every `"..."` token in `s`, left to right.
///
/// # Errors
///
/// [`StilError::MalformedInput`] if a `"` is left without its closing quote.
pub(crate) fn quoted(s: &str) -> StilResult<Vec<&str>> {
    let parts: Vec<&str> = s.split('"').collect();
    if parts.len() % 2 == 0 {
        return Err(StilError::malformed(format!(
            "unterminated quoted token in '{}'",
            s.trim()
        )));
    }
    Ok(parts.into_iter().skip(1).step_by(2).collect())
}

/// Splits on `sep` and drops blank pieces, trimming the rest.
pub(crate) fn pieces(s: &str, sep: char) -> impl Iterator<Item = &str> {
    s.split(sep).map(str::trim).filter(|p| !p.is_empty())
}

/// Whether `line` opens a `<keyword> {` block, with any spacing before `{`.
pub(crate) fn is_block_header(line: &str, keyword: &str) -> bool {
    line.strip_prefix(keyword)
        .is_some_and(|rest| rest.trim() == "{")
}

/// Parses `<digits><unit>`, e.g. `100ns`, allowing spaces between the two.
pub(crate) fn duration(s: &str) -> StilResult<(u64, TimeUnit)> {
    let s = s.trim();
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (digits, unit) = (&s[..split], s[split..].trim());
    if digits.is_empty() {
        return Err(StilError::malformed(format!("missing magnitude in '{s}'")));
    }
    if unit.is_empty() {
        return Err(StilError::malformed(format!("missing time unit in '{s}'")));
    }
    let magnitude = digits
        .parse::<u64>()
        .map_err(|_| StilError::malformed(format!("magnitude '{digits}' is out of range")))?;
    Ok((magnitude, unit.parse()?))
}

/// The decimal number directly following `marker`, e.g. `TesterCycle:12`.
pub(crate) fn number_after(s: &str, marker: &str) -> StilResult<Option<u64>> {
    let Some(pos) = s.find(marker) else {
        return Ok(None);
    };
    let rest = &s[pos + marker.len()..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return Err(StilError::malformed(format!("missing number after '{marker}'")));
    }
    rest[..end]
        .parse::<u64>()
        .map(Some)
        .map_err(|_| StilError::malformed(format!("number after '{marker}' is out of range")))
}
