//! Split engine.
//!
//! Every share is rounded *down* to the rounding unit, so no participant is
//! ever asked for more than their exact share and the leftover
//! (`total - Σ amount * count`) stays non-negative.

use crate::{
    model::{Money, ParticipantEntry, RoundingUnit},
    roster::Roster,
};
use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Which formula a split uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Everyone active pays the same per-person amount.
    Uniform,
    /// Each active slot pays in proportion to its weight.
    Weighted,
}

impl SplitPolicy {
    /// Weighted only when every active slot has a weight; a single unweighted
    /// active slot sends the whole roster to the uniform split.
    pub fn select(roster: &Roster) -> Self {
        if roster.has_complete_weights() {
            Self::Weighted
        } else {
            Self::Uniform
        }
    }
}

/// Split calculation service
pub struct SplitCalculator;

impl SplitCalculator {
    /// Computes a new roster snapshot with every `amount` rewritten.
    ///
    /// Inactive slots get zero. Degenerate inputs (nobody active, zero total
    /// weight) produce an all-zero split rather than an error.
    pub fn calculate(&self, roster: &Roster, total_amount: Money, unit: RoundingUnit) -> Roster {
        let policy = SplitPolicy::select(roster);
        let total_amount = if total_amount.is_negative() {
            Money::ZERO
        } else {
            total_amount
        };

        tracing::debug!(
            policy = ?policy,
            total_amount = %total_amount,
            rounding_unit = %unit,
            total_count = roster.total_count(),
            "Split calculation started"
        );

        let amounts = match policy {
            SplitPolicy::Uniform => uniform_amounts(roster.entries(), total_amount, unit),
            SplitPolicy::Weighted => weighted_amounts(roster.entries(), total_amount, unit)
                .unwrap_or_else(|| {
                    tracing::warn!(
                        total_amount = %total_amount,
                        rounding_unit = %unit,
                        "Weighted split overflowed decimal precision; falling back to zero amounts"
                    );
                    vec![Money::ZERO; roster.capacity()]
                }),
        };

        let entries: Vec<ParticipantEntry> = roster
            .iter()
            .zip(amounts)
            .map(|(entry, amount)| ParticipantEntry {
                amount,
                ..entry.clone()
            })
            .collect();
        let result = roster.with_entries(entries);

        tracing::debug!(
            policy = ?policy,
            allocated = %result.allocated(),
            leftover = %result.leftover(total_amount),
            "Split calculation finished"
        );

        result
    }
}

fn uniform_amounts(entries: &[ParticipantEntry], total: Money, unit: RoundingUnit) -> Vec<Money> {
    let total_count: u64 = entries.iter().map(|entry| u64::from(entry.count)).sum();
    let per_person = if total_count == 0 {
        Money::ZERO
    } else {
        let divisor = i64::try_from(total_count).unwrap_or(i64::MAX);
        unit.floor(Money::from_i64(total.amount() / divisor))
    };

    entries
        .iter()
        .map(|entry| {
            if entry.is_active() {
                per_person
            } else {
                Money::ZERO
            }
        })
        .collect()
}

/// Weight that takes part in the split: present and strictly positive.
fn effective_weight(entry: &ParticipantEntry) -> Option<Decimal> {
    entry
        .weight
        .filter(|weight| entry.is_active() && *weight > Decimal::ZERO)
}

/// `None` when an intermediate value overflows `Decimal`.
fn weighted_amounts(
    entries: &[ParticipantEntry],
    total: Money,
    unit: RoundingUnit,
) -> Option<Vec<Money>> {
    let total_weight = entries.iter().try_fold(Decimal::ZERO, |acc, entry| {
        match effective_weight(entry) {
            Some(weight) => acc.checked_add(weight.checked_mul(Decimal::from(entry.count))?),
            None => Some(acc),
        }
    })?;

    if total_weight.is_zero() {
        return Some(vec![Money::ZERO; entries.len()]);
    }

    let total = total.as_decimal();
    let step = unit.as_decimal();
    entries
        .iter()
        .map(|entry| {
            let Some(weight) = effective_weight(entry) else {
                return Some(Money::ZERO);
            };
            let units = total
                .checked_mul(weight)?
                .checked_div(total_weight)?
                .checked_div(step)?
                .floor()
                .to_i64()?;
            Some(unit.multiple(units))
        })
        .collect()
}
