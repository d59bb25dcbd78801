#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod roster_presenter;

pub use error_presenter::{format_load_error, format_validation_error};
pub use roster_presenter::{RosterPresenter, format_money};
