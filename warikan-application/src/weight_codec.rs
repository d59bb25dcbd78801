//! Weight roster ⇄ token.
//!
//! The token is `compress(json)`, where `json` is an array of
//! `{"name": string, "weight": number}` objects.

use crate::ports::TokenCompressor;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde_json::{Number, Value, json};
use warikan_domain::WeightRecord;
use warikan_parser::{Expected, ParseError, SchemaIssue, parse_json, parse_strict_number};

/// Field name used by older tokens for the weight.
const LEGACY_WEIGHT_FIELD: &str = "keisha";

#[derive(Clone, Copy)]
pub struct WeightTokenCodec<'a> {
    compressor: &'a dyn TokenCompressor,
}

impl<'a> WeightTokenCodec<'a> {
    pub fn new(compressor: &'a dyn TokenCompressor) -> Self {
        Self { compressor }
    }

    /// Serializes every set record (non-empty name, non-zero weight) and
    /// compresses the JSON text. Unset records are dropped.
    pub fn encode(&self, records: &[WeightRecord]) -> String {
        let items: Vec<Value> = records
            .iter()
            .filter(|record| record.is_set())
            .filter_map(|record| {
                let Some(weight) = weight_to_json(record.weight) else {
                    tracing::warn!(
                        name = %record.name,
                        weight = %record.weight,
                        "Weight has no exact JSON number representation; record skipped"
                    );
                    return None;
                };
                Some(json!({ "name": record.name, "weight": weight }))
            })
            .collect();

        let text = Value::Array(items).to_string();
        self.compressor.compress(&text)
    }

    /// Decompresses, parses and validates a token, returning the records in
    /// their original order.
    pub fn decode(&self, token: &str) -> Result<Vec<WeightRecord>, ParseError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ParseError::InvalidToken);
        }

        let text = self
            .compressor
            .decompress(token)
            .ok_or(ParseError::InvalidToken)?;
        let value = parse_json(&text)?;
        validate_weight_records(&value)
    }
}

/// Integral weights become JSON integers (`2`, not `2.0`). Other weights go
/// through `f64` and are `None` unless they read back unchanged.
fn weight_to_json(weight: Decimal) -> Option<Number> {
    if weight.fract().is_zero()
        && let Some(integral) = weight.to_i64()
    {
        return Some(Number::from(integral));
    }
    let number = weight.to_f64().and_then(Number::from_f64)?;
    match parse_strict_number(&number.to_string()) {
        Ok(read_back) if read_back == weight => Some(number),
        _ => None,
    }
}

fn json_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Checks `value` against the weight-record list shape, collecting every
/// violation instead of stopping at the first.
pub fn validate_weight_records(value: &Value) -> Result<Vec<WeightRecord>, ParseError> {
    let Value::Array(items) = value else {
        return Err(ParseError::SchemaViolation {
            issues: vec![SchemaIssue {
                path: "$".to_string(),
                expected: Expected::Array,
                found: json_kind(Some(value)),
            }],
        });
    };

    let mut issues = Vec::new();
    let mut records = Vec::with_capacity(items.len());

    for (idx, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            issues.push(SchemaIssue {
                path: format!("$[{idx}]"),
                expected: Expected::Object,
                found: json_kind(Some(item)),
            });
            continue;
        };

        let name = match fields.get("name") {
            Some(Value::String(name)) => Some(name),
            other => {
                issues.push(SchemaIssue {
                    path: format!("$[{idx}].name"),
                    expected: Expected::String,
                    found: json_kind(other),
                });
                None
            }
        };

        let weight_field = fields
            .get("weight")
            .or_else(|| fields.get(LEGACY_WEIGHT_FIELD));
        let weight = match weight_field {
            Some(Value::Number(number)) => match parse_strict_number(&number.to_string()) {
                Ok(weight) => Some(weight),
                Err(_) => {
                    issues.push(SchemaIssue {
                        path: format!("$[{idx}].weight"),
                        expected: Expected::Number,
                        found: "out-of-range number",
                    });
                    None
                }
            },
            other => {
                issues.push(SchemaIssue {
                    path: format!("$[{idx}].weight"),
                    expected: Expected::Number,
                    found: json_kind(other),
                });
                None
            }
        };

        if let (Some(name), Some(weight)) = (name, weight) {
            records.push(WeightRecord::new(name.clone(), weight));
        }
    }

    if issues.is_empty() {
        Ok(records)
    } else {
        Err(ParseError::SchemaViolation { issues })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::str::FromStr;

    /// Prefixes the text so that foreign tokens are detectable.
    pub(crate) struct PrefixCompressor;

    impl TokenCompressor for PrefixCompressor {
        fn compress(&self, text: &str) -> String {
            format!("v1:{text}")
        }

        fn decompress(&self, token: &str) -> Option<String> {
            token.strip_prefix("v1:").map(str::to_string)
        }
    }

    #[fixture]
    fn codec() -> WeightTokenCodec<'static> {
        WeightTokenCodec::new(&PrefixCompressor)
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("valid decimal")
    }

    #[rstest]
    fn encode_writes_name_then_weight(codec: WeightTokenCodec<'static>) {
        let token = codec.encode(&[
            WeightRecord::new("A", dec("1.5")),
            WeightRecord::new("B", dec("2")),
        ]);
        assert_eq!(
            token,
            r#"v1:[{"name":"A","weight":1.5},{"name":"B","weight":2}]"#
        );
    }

    #[rstest]
    fn encode_drops_unset_records(codec: WeightTokenCodec<'static>) {
        let token = codec.encode(&[
            WeightRecord::new("A", dec("1.5")),
            WeightRecord::new("", dec("2")),
            WeightRecord::new("C", Decimal::ZERO),
        ]);
        assert_eq!(
            codec.decode(&token),
            Ok(vec![WeightRecord::new("A", dec("1.5"))])
        );
    }

    #[rstest]
    #[case::beyond_f64_precision("1.00000000000000000001")]
    #[case::long_fraction("0.1234567890123456789")]
    #[case::integral_beyond_i64("12345678901234567890")]
    fn encode_skips_weights_f64_cannot_hold(
        codec: WeightTokenCodec<'static>,
        #[case] weight: &str,
    ) {
        let token = codec.encode(&[
            WeightRecord::new("A", dec(weight)),
            WeightRecord::new("B", dec("0.75")),
        ]);
        assert_eq!(token, r#"v1:[{"name":"B","weight":0.75}]"#);
        assert_eq!(
            codec.decode(&token),
            Ok(vec![WeightRecord::new("B", dec("0.75"))])
        );
    }

    #[rstest]
    #[case::tenth("0.1")]
    #[case::fifteen_digits("1.23456789012345")]
    #[case::negative("-2.5")]
    #[case::integral("-7")]
    fn encode_keeps_weights_that_read_back_exactly(
        codec: WeightTokenCodec<'static>,
        #[case] weight: &str,
    ) {
        let records = vec![WeightRecord::new("A", dec(weight))];
        assert_eq!(codec.decode(&codec.encode(&records)), Ok(records));
    }

    #[rstest]
    fn empty_list_round_trips(codec: WeightTokenCodec<'static>) {
        let token = codec.encode(&[]);
        assert_eq!(token, "v1:[]");
        assert_eq!(codec.decode(&token), Ok(vec![]));
    }

    #[rstest]
    #[case::foreign("not-a-valid-token")]
    #[case::empty("")]
    #[case::blank("   ")]
    fn decode_rejects_undecodable_tokens(codec: WeightTokenCodec<'static>, #[case] token: &str) {
        assert_eq!(codec.decode(token), Err(ParseError::InvalidToken));
    }

    #[rstest]
    fn decode_trims_whitespace(codec: WeightTokenCodec<'static>) {
        let decoded = codec.decode("  v1:[{\"name\":\"A\",\"weight\":1}]\n");
        assert_eq!(decoded, Ok(vec![WeightRecord::new("A", Decimal::ONE)]));
    }

    #[rstest]
    fn decode_reports_malformed_json(codec: WeightTokenCodec<'static>) {
        assert!(matches!(
            codec.decode("v1:[{\"name\":"),
            Err(ParseError::InvalidJson { .. })
        ));
    }

    #[rstest]
    fn decode_accepts_legacy_weight_field(codec: WeightTokenCodec<'static>) {
        let decoded = codec.decode(r#"v1:[{"name":"A","keisha":0.8}]"#);
        assert_eq!(decoded, Ok(vec![WeightRecord::new("A", dec("0.8"))]));
    }

    #[rstest]
    #[case::not_an_array(r#"{"name":"A","weight":1}"#, &["$"])]
    #[case::element_not_object(r#"[1, {"name":"A","weight":1}]"#, &["$[0]"])]
    #[case::name_number(r#"[{"name":1,"weight":1}]"#, &["$[0].name"])]
    #[case::weight_string(r#"[{"name":"A","weight":"1"}]"#, &["$[0].weight"])]
    #[case::both_missing(r#"[{}]"#, &["$[0].name", "$[0].weight"])]
    #[case::spread_over_elements(
        r#"[{"name":"A","weight":null},{"name":"B","weight":1},{"name":false,"weight":2}]"#,
        &["$[0].weight", "$[2].name"]
    )]
    fn schema_violations_are_accumulated(#[case] json: &str, #[case] expected_paths: &[&str]) {
        let value = parse_json(json).expect("valid json");
        let Err(ParseError::SchemaViolation { issues }) = validate_weight_records(&value) else {
            panic!("expected schema violation");
        };
        let paths: Vec<&str> = issues.iter().map(|issue| issue.path.as_str()).collect();
        assert_eq!(paths, expected_paths);
    }

    #[test]
    fn schema_issue_describes_found_type() {
        let value = parse_json(r#"[{"name":"A","weight":true}]"#).expect("valid json");
        assert_eq!(
            validate_weight_records(&value),
            Err(ParseError::SchemaViolation {
                issues: vec![SchemaIssue {
                    path: "$[0].weight".to_string(),
                    expected: Expected::Number,
                    found: "boolean",
                }]
            })
        );
    }

    #[test]
    fn negative_and_exponent_weights_are_numbers() {
        let value = parse_json(r#"[{"name":"A","weight":-2},{"name":"B","weight":1e2}]"#)
            .expect("valid json");
        assert_eq!(
            validate_weight_records(&value),
            Ok(vec![
                WeightRecord::new("A", dec("-2")),
                WeightRecord::new("B", dec("100")),
            ])
        );
    }
}
