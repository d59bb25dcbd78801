#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod roster;
pub mod services;

pub use model::{Direction, Money, ParticipantEntry, RoundingUnit, ValidationError, WeightRecord};
pub use roster::{DEFAULT_ROSTER_SIZE, Roster};
pub use services::{SplitCalculator, SplitPolicy};
