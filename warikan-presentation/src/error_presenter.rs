use warikan_application::{LoadWeightsError, ParseError};
use warikan_domain::ValidationError;

pub fn format_validation_error(error: &ValidationError) -> String {
    match error {
        ValidationError::CapacityExceeded { len, capacity } => {
            warikan_i18n::capacity_exceeded(*len, *capacity)
        }
        ValidationError::ZeroRoundingUnit => warikan_i18n::ZERO_ROUNDING_UNIT.to_string(),
        ValidationError::RoundingUnitTooLarge { value, max } => {
            warikan_i18n::rounding_unit_too_large(*value, *max)
        }
        ValidationError::EmptyRoster => warikan_i18n::EMPTY_ROSTER.to_string(),
    }
}

pub fn format_load_error(error: &LoadWeightsError) -> String {
    match error {
        LoadWeightsError::Parse(ParseError::InvalidToken) => {
            warikan_i18n::INVALID_TOKEN.to_string()
        }
        LoadWeightsError::Parse(ParseError::InvalidJson { detail }) => {
            warikan_i18n::invalid_weight_json(detail)
        }
        LoadWeightsError::Parse(ParseError::SchemaViolation { issues }) => {
            let listing = issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            warikan_i18n::schema_violation(listing)
        }
        LoadWeightsError::Parse(ParseError::InvalidNumber { input }) => {
            warikan_i18n::invalid_number(input)
        }
        LoadWeightsError::Validation(err) => format_validation_error(err),
    }
}
