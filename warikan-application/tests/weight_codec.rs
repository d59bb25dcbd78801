use proptest::prelude::*;
use rust_decimal::Decimal;
use warikan_application::{TokenCompressor, WeightTokenCodec};
use warikan_domain::WeightRecord;

struct PassthroughCompressor;

impl TokenCompressor for PassthroughCompressor {
    fn compress(&self, text: &str) -> String {
        text.to_string()
    }

    fn decompress(&self, token: &str) -> Option<String> {
        Some(token.to_string())
    }
}

fn record_strategy() -> impl Strategy<Value = WeightRecord> {
    (
        "[A-Za-z0-9ぁ-ん ]{0,8}",
        -10_000i64..=10_000,
        0u32..=3,
    )
        .prop_map(|(name, mantissa, scale)| WeightRecord::new(name, Decimal::new(mantissa, scale)))
}

proptest! {
    #[test]
    fn set_records_round_trip(records in prop::collection::vec(record_strategy(), 0..=12)) {
        let records: Vec<WeightRecord> = records.into_iter().filter(WeightRecord::is_set).collect();
        let codec = WeightTokenCodec::new(&PassthroughCompressor);

        let decoded = codec.decode(&codec.encode(&records)).expect("own token decodes");
        prop_assert_eq!(decoded, records);
    }

    #[test]
    fn encode_only_keeps_set_records(records in prop::collection::vec(record_strategy(), 0..=12)) {
        let codec = WeightTokenCodec::new(&PassthroughCompressor);

        let decoded = codec.decode(&codec.encode(&records)).expect("own token decodes");
        prop_assert!(decoded.len() <= records.len());
        prop_assert!(decoded.iter().all(WeightRecord::is_set));
        let expected: Vec<WeightRecord> =
            records.into_iter().filter(WeightRecord::is_set).collect();
        prop_assert_eq!(decoded, expected);
    }
}
