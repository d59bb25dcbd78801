#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const TOTAL_AMOUNT: &str = "合計金額";
    pub const ROUNDING_UNIT: &str = "最小単位金額";
    pub const LEFTOVER: &str = "端数金額";
    pub const CURRENCY_SUFFIX: &str = "円";
    pub const WEIGHT_TOKEN: &str = "傾斜";
    pub const INVALID_TOKEN: &str = "傾斜データを読み込めませんでした";
    pub const ZERO_ROUNDING_UNIT: &str = "最小単位金額は1以上にしてください";
    pub const EMPTY_ROSTER: &str = "参加者の枠が1つ以上必要です";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const TOTAL_AMOUNT: &str = "Total";
    pub const ROUNDING_UNIT: &str = "Rounding unit";
    pub const LEFTOVER: &str = "Leftover";
    pub const CURRENCY_SUFFIX: &str = "yen";
    pub const WEIGHT_TOKEN: &str = "Weights";
    pub const INVALID_TOKEN: &str = "Could not read the weight token";
    pub const ZERO_ROUNDING_UNIT: &str = "Rounding unit must be at least 1";
    pub const EMPTY_ROSTER: &str = "The roster needs at least one slot";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn invalid_weight_json(detail: impl std::fmt::Display) -> String {
    format!("傾斜データのJSONが不正です: {detail}")
}

#[cfg(feature = "ja")]
pub fn schema_violation(issues: impl std::fmt::Display) -> String {
    format!("傾斜データの形式が不正です: {issues}")
}

#[cfg(feature = "ja")]
pub fn capacity_exceeded(len: usize, capacity: usize) -> String {
    format!("傾斜データが{len}件あります。読み込めるのは{capacity}件までです")
}

#[cfg(feature = "ja")]
pub fn invalid_number(input: impl std::fmt::Display) -> String {
    format!("'{input}' は数値ではありません")
}

#[cfg(feature = "ja")]
pub fn rounding_unit_too_large(value: u64, max: u64) -> String {
    format!("最小単位金額 {value} は大きすぎます ({max} 以下にしてください)")
}

#[cfg(feature = "ja")]
pub fn slot_out_of_range(index: usize, capacity: usize) -> String {
    format!(
        "枠 {index} は存在しません (0〜{} の範囲で指定してください)",
        capacity.saturating_sub(1)
    )
}

#[cfg(not(feature = "ja"))]
pub fn invalid_weight_json(detail: impl std::fmt::Display) -> String {
    format!("Weight data is not valid JSON: {detail}")
}

#[cfg(not(feature = "ja"))]
pub fn schema_violation(issues: impl std::fmt::Display) -> String {
    format!("Weight data has the wrong shape: {issues}")
}

#[cfg(not(feature = "ja"))]
pub fn capacity_exceeded(len: usize, capacity: usize) -> String {
    format!("The token holds {len} weights but the roster has only {capacity} slots")
}

#[cfg(not(feature = "ja"))]
pub fn invalid_number(input: impl std::fmt::Display) -> String {
    format!("'{input}' is not a number")
}

#[cfg(not(feature = "ja"))]
pub fn rounding_unit_too_large(value: u64, max: u64) -> String {
    format!("Rounding unit {value} is too large (use at most {max})")
}

#[cfg(not(feature = "ja"))]
pub fn slot_out_of_range(index: usize, capacity: usize) -> String {
    format!(
        "Slot {index} does not exist (use 0 to {})",
        capacity.saturating_sub(1)
    )
}
