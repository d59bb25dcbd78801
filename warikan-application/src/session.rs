use crate::{error::LoadWeightsError, weight_codec::WeightTokenCodec};
use warikan_domain::{
    Direction, Money, Roster, RoundingUnit, SplitCalculator, ValidationError, WeightRecord,
};
use warikan_parser::sanitize_digits;

/// State of one splitting session: the roster plus the two input fields.
///
/// Mutations replace the roster snapshot wholesale; `roster()` always
/// returns a consistent state.
#[derive(Clone)]
pub struct WarikanSession<'a> {
    codec: WeightTokenCodec<'a>,
    roster: Roster,
    total_amount: Money,
    rounding_unit: RoundingUnit,
}

impl<'a> WarikanSession<'a> {
    pub fn new(
        codec: WeightTokenCodec<'a>,
        capacity: usize,
        rounding_unit: RoundingUnit,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            codec,
            roster: Roster::new(capacity)?,
            total_amount: Money::ZERO,
            rounding_unit,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn rounding_unit(&self) -> RoundingUnit {
        self.rounding_unit
    }

    /// Reads the total from free-form text; non-digits are ignored.
    pub fn set_total_amount(&mut self, text: &str) -> Money {
        self.total_amount = Money::from_u64(sanitize_digits(text));
        self.total_amount
    }

    /// Reads the rounding unit from free-form text. A zero unit or one above
    /// [`RoundingUnit::MAX`] is rejected and the previous unit kept.
    pub fn set_rounding_unit(&mut self, text: &str) -> Result<RoundingUnit, ValidationError> {
        let value = sanitize_digits(text);
        let unit = match RoundingUnit::new(value) {
            Some(unit) => unit,
            None if value == 0 => return Err(ValidationError::ZeroRoundingUnit),
            None => {
                return Err(ValidationError::RoundingUnitTooLarge {
                    value,
                    max: RoundingUnit::MAX,
                });
            }
        };
        self.rounding_unit = unit;
        Ok(unit)
    }

    /// # Panics
    /// If `index` is not below the roster capacity.
    pub fn adjust_count(&mut self, index: usize, direction: Direction) {
        self.roster = self.roster.adjust_count(index, direction);
    }

    /// Steps the amount by the current rounding unit.
    ///
    /// # Panics
    /// If `index` is not below the roster capacity.
    pub fn adjust_amount(&mut self, index: usize, direction: Direction) {
        self.roster = self
            .roster
            .adjust_amount(index, direction, self.rounding_unit);
    }

    /// Runs the split over the current roster.
    pub fn warikan(&mut self) {
        self.roster =
            SplitCalculator.calculate(&self.roster, self.total_amount, self.rounding_unit);
    }

    pub fn leftover(&self) -> Money {
        self.roster.leftover(self.total_amount)
    }

    /// Decodes `token` and merges its weights into a freshly reset roster.
    ///
    /// On failure the session is left untouched and the reason returned.
    pub fn load_weights(&mut self, token: &str) -> Result<usize, LoadWeightsError> {
        let records = self.codec.decode(token).inspect_err(|err| {
            tracing::warn!(error = %err, "Rejected weight token");
        })?;
        let roster = self.roster.merge_weights(&records).inspect_err(|err| {
            tracing::warn!(error = %err, record_count = records.len(), "Rejected weight records");
        })?;

        tracing::debug!(record_count = records.len(), "Weights loaded");
        self.roster = roster;
        Ok(records.len())
    }

    pub fn export_records(&self) -> Vec<WeightRecord> {
        self.roster.export_weights()
    }

    /// Token for the weights currently held by the roster.
    pub fn export_weights(&self) -> String {
        self.codec.encode(&self.export_records())
    }
}
