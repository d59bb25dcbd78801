use warikan_domain::ValidationError;
use warikan_parser::ParseError;

/// Why a weight token could not be loaded into the session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadWeightsError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
