//! The error taxonomy shared by the STIL model and parser.
//!
//! Every error is fatal to the parse of the current file. Parser stages wrap
//! the underlying error in [`StilError::AtLine`] so that the failure carries
//! the 1-based line number and the offending line's content.

use crate::unit::TimeUnit;

/// Result alias for fallible model and parser operations.
pub type StilResult<T> = Result<T, StilError>;

/// Errors raised while decoding STIL text or mutating the test model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StilError {
    /// A required marker, quoted token, number, or unit could not be located
    /// where the grammar requires it.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A condition or value of one direction was applied to a signal group
    /// of the opposite direction.
    #[error("direction mismatch: {0}")]
    DirectionMismatch(String),

    /// A waveform timestamp lies beyond the waveform table period.
    #[error("timestamp {timestamp}{unit} exceeds period {period}{unit}")]
    OutOfPeriod {
        /// The offending timestamp.
        timestamp: u64,
        /// The table period.
        period: u64,
        /// The unit shared by both.
        unit: TimeUnit,
    },

    /// A signal, signal group, test name, or waveform table was defined twice.
    #[error("duplicate {what} '{name}'")]
    DuplicateDefinition {
        /// What kind of entity was redefined.
        what: &'static str,
        /// Its name.
        name: String,
    },

    /// A signal took part in a test vector but no waveform covers its group.
    #[error("no waveform defined for signal '{0}'")]
    UnresolvedSignal(String),

    /// A decoded token is not a recognized unit, direction, or code.
    #[error("unknown {kind} '{value}'")]
    UnknownEnumValue {
        /// The value set that was searched.
        kind: &'static str,
        /// The rejected token.
        value: String,
    },

    /// A signal group reached waveform or vector handling without a direction.
    #[error("signal group '{0}' has no direction")]
    InvalidDirection(String),

    /// A name refers to a signal or signal group that was never declared.
    #[error("undefined {what} '{name}'")]
    UndefinedReference {
        /// What kind of entity was looked up.
        what: &'static str,
        /// The unresolved name.
        name: String,
    },

    /// Another error, located at a line of the source text.
    #[error("line {line}: {source}: `{content}`")]
    AtLine {
        /// The 1-based line number.
        line: usize,
        /// The trimmed content of the line.
        content: String,
        /// The underlying error.
        source: Box<StilError>,
    },
}

impl StilError {
    /// Shorthand for [`StilError::MalformedInput`].
    pub fn malformed(message: impl Into<String>) -> Self {
        StilError::MalformedInput(message.into())
    }

    /// Attaches a source line to this error.
    ///
    /// An error that already carries a line keeps its original location.
    pub fn at_line(self, line: usize, content: &str) -> Self {
        match self {
            located @ StilError::AtLine { .. } => located,
            other => StilError::AtLine {
                line,
                content: content.trim().to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Returns the underlying error, looking through any line location.
    pub fn root(&self) -> &StilError {
        match self {
            StilError::AtLine { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the 1-based line number, if the error is located.
    pub fn line(&self) -> Option<usize> {
        match self {
            StilError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_period() {
        let err = StilError::OutOfPeriod {
            timestamp: 120,
            period: 100,
            unit: TimeUnit::Ns,
        };
        assert_eq!(err.to_string(), "timestamp 120ns exceeds period 100ns");
    }

    #[test]
    fn display_duplicate() {
        let err = StilError::DuplicateDefinition {
            what: "signal group",
            name: "all_in".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate signal group 'all_in'");
    }

    #[test]
    fn at_line_wraps_once() {
        let err = StilError::malformed("missing period")
            .at_line(12, "   Period ;  ")
            .at_line(40, "ignored");
        assert_eq!(err.line(), Some(12));
        assert_eq!(
            err.to_string(),
            "line 12: malformed input: missing period: `Period ;`"
        );
    }

    #[test]
    fn root_looks_through_location() {
        let err = StilError::UnresolvedSignal("clk".to_string()).at_line(3, "clk = 1;");
        assert_eq!(err.root(), &StilError::UnresolvedSignal("clk".to_string()));
        assert_eq!(StilError::malformed("x").line(), None);
    }
}
