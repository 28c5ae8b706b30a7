//! In-memory model of one STIL test.
//!
//! A [`StilTest`] owns the signal and signal group registries, the single
//! [`WaveformTable`] with one [`Waveform`] per group, and the resolved
//! [`TestVector`]s keyed by tester cycle. Groups, waveforms and vectors refer
//! to registry entries through [`SignalId`] and [`GroupId`].
//!
//! Vectors are produced by [`StilTest::add_test_vector`], which expands a
//! per-cycle value string through the waveforms into timed events.

#![warn(missing_docs)]

pub mod dump;
pub mod ids;
mod resolve;
pub mod signal;
pub mod table;
pub mod vector;
pub mod waveform;

pub use ids::{GroupId, SignalId};
pub use signal::{Signal, SignalGroup};
pub use table::WaveformTable;
pub use test::StilTest;
pub use vector::{Event, TestVector};
pub use waveform::{Shape, Timeline, Waveform};
