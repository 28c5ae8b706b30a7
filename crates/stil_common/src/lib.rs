//! Shared foundational types for the STIL toolchain.
//!
//! This crate provides the closed value sets decoded from STIL text (time
//! units, signal directions, timing condition and event value codes) and the
//! [`StilError`] taxonomy shared by the model and the parser.

#![warn(missing_docs)]

pub mod code;
pub mod direction;
pub mod error;
pub mod unit;

pub use code::{CompareCondition, CompareValue, Condition, DriveCondition, EventValue, ForceValue};
pub use direction::Direction;
pub use error::{StilError, StilResult};
pub use unit::{TimeUnit, FS_PER_MS, FS_PER_NS, FS_PER_PS, FS_PER_US};
