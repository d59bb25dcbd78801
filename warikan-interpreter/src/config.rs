use std::env;

use warikan_domain::{DEFAULT_ROSTER_SIZE, RoundingUnit};

const ROSTER_SIZE_VAR: &str = "WARIKAN_ROSTER_SIZE";
const ROUNDING_UNIT_VAR: &str = "WARIKAN_ROUNDING_UNIT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer (got '{value}')")]
    InvalidPositiveInteger { name: &'static str, value: String },
    #[error("{name} is too large (got {value}, at most {max})")]
    OutOfRange {
        name: &'static str,
        value: u64,
        max: u64,
    },
}

/// Interpreter configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub roster_size: usize,
    pub rounding_unit: RoundingUnit,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            roster_size: DEFAULT_ROSTER_SIZE,
            rounding_unit: RoundingUnit::DEFAULT,
        }
    }
}

impl AppConfig {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let roster_size = match lookup(ROSTER_SIZE_VAR) {
            Some(value) => positive_integer(ROSTER_SIZE_VAR, &value)?,
            None => defaults.roster_size as u64,
        };
        let rounding_unit = match lookup(ROUNDING_UNIT_VAR) {
            Some(value) => positive_integer(ROUNDING_UNIT_VAR, &value)?,
            None => defaults.rounding_unit.get(),
        };

        Ok(Self {
            roster_size: usize::try_from(roster_size).map_err(|_| ConfigError::OutOfRange {
                name: ROSTER_SIZE_VAR,
                value: roster_size,
                max: usize::MAX as u64,
            })?,
            rounding_unit: RoundingUnit::new(rounding_unit).ok_or(ConfigError::OutOfRange {
                name: ROUNDING_UNIT_VAR,
                value: rounding_unit,
                max: RoundingUnit::MAX,
            })?,
        })
    }
}

fn positive_integer(name: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidPositiveInteger {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(config_from(&[]), Ok(AppConfig::default()));
    }

    #[test]
    fn reads_both_variables() {
        let config = config_from(&[
            ("WARIKAN_ROSTER_SIZE", "20"),
            ("WARIKAN_ROUNDING_UNIT", " 100 "),
        ])
        .expect("valid config");

        assert_eq!(config.roster_size, 20);
        assert_eq!(config.rounding_unit.get(), 100);
    }

    #[rstest]
    #[case::zero_size("WARIKAN_ROSTER_SIZE", "0")]
    #[case::negative_unit("WARIKAN_ROUNDING_UNIT", "-1")]
    #[case::text_unit("WARIKAN_ROUNDING_UNIT", "thousand")]
    fn rejects_non_positive_values(#[case] name: &str, #[case] value: &str) {
        assert!(matches!(
            config_from(&[(name, value)]),
            Err(ConfigError::InvalidPositiveInteger { .. })
        ));
    }

    #[test]
    fn rejects_unit_beyond_money_range() {
        assert_eq!(
            config_from(&[("WARIKAN_ROUNDING_UNIT", "18446744073709551615")]),
            Err(ConfigError::OutOfRange {
                name: "WARIKAN_ROUNDING_UNIT",
                value: u64::MAX,
                max: RoundingUnit::MAX,
            })
        );
    }
}
