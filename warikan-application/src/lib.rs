#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod ports;
pub mod session;
pub mod weight_codec;

pub use error::LoadWeightsError;
pub use ports::TokenCompressor;
pub use session::WarikanSession;
pub use weight_codec::WeightTokenCodec;
pub use warikan_parser::{Expected, ParseError, SchemaIssue};
