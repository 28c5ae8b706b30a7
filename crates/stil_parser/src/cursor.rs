//! Forward-only cursor over the lines of a STIL source.

use stil_common::{StilError, StilResult};

/// One source line with its 1-based number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    /// Attaches this line's position and content to `err`.
    pub fn locate(&self, err: StilError) -> StilError {
        err.at_line(self.number, self.text)
    }
}

pub(crate) struct Cursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let text = *self.lines.get(self.pos)?;
        self.pos += 1;
        Some(Line {
            number: self.pos,
            text,
        })
    }

    /// Advances past the first line matching `is_marker` and returns it.
    ///
    /// Running out of lines is a [`StilError::MalformedInput`] naming `what`.
    pub fn seek(&mut self, what: &str, is_marker: impl Fn(&str) -> bool) -> StilResult<Line<'a>> {
        while let Some(line) = self.next_line() {
            if is_marker(line.trimmed()) {
                return Ok(line);
            }
        }
        Err(StilError::malformed(format!(
            "reached end of input while looking for {what}"
        )))
    }

    /// The next non-blank line inside a `{ ... }` block, or `None` once the
    /// closing `}` line has been consumed.
    pub fn block_line(&mut self, block: &str) -> StilResult<Option<Line<'a>>> {
        while let Some(line) = self.next_line() {
            match line.trimmed() {
                "" => continue,
                "}" => return Ok(None),
                _ => return Ok(Some(line)),
            }
        }
        Err(StilError::malformed(format!("unterminated {block} block")))
    }
}
