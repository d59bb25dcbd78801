use std::fmt::Write as _;

use warikan_domain::{Money, Roster, RoundingUnit};

/// Formats an amount with `,` thousands separators, e.g. `-12,345`.
pub fn format_money(money: Money) -> String {
    let digits = money.amount().unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if money.is_negative() {
        grouped.push('-');
    }
    for (idx, digit) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn with_currency(money: Money) -> String {
    format!("{} {}", format_money(money), warikan_i18n::CURRENCY_SUFFIX)
}

pub struct RosterPresenter;

impl RosterPresenter {
    /// Renders the summary header followed by one line per slot. Named slots
    /// get a `| name (weight)` line above them.
    pub fn render(roster: &Roster, total_amount: Money, rounding_unit: RoundingUnit) -> String {
        let mut reply = String::with_capacity(64 * (roster.capacity() + 3));

        let _ = writeln!(
            &mut reply,
            "{}: {}",
            warikan_i18n::TOTAL_AMOUNT,
            with_currency(total_amount)
        );
        let _ = writeln!(
            &mut reply,
            "{}: {}",
            warikan_i18n::ROUNDING_UNIT,
            with_currency(rounding_unit.as_money())
        );
        let _ = writeln!(
            &mut reply,
            "{}: {}",
            warikan_i18n::LEFTOVER,
            with_currency(roster.leftover(total_amount))
        );

        for (idx, entry) in roster.iter().enumerate() {
            if let Some(name) = &entry.name {
                let weight = entry
                    .weight
                    .map(|weight| weight.normalize().to_string())
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(&mut reply, "| {name} ({weight})");
            }
            let _ = writeln!(
                &mut reply,
                "[{idx}] x{} {}",
                entry.count,
                with_currency(entry.amount)
            );
        }

        reply
    }
}
