use std::{borrow::Cow, fmt::Write as _};

use warikan_application::WarikanSession;
use warikan_domain::Direction;
use warikan_parser::{Command, Script, Step};
use warikan_presentation::{RosterPresenter, format_load_error, format_validation_error};

pub(crate) type CliResult<T> = Result<T, Cow<'static, str>>;

fn direction(step: Step) -> Direction {
    match step {
        Step::Plus => Direction::Increment,
        Step::Minus => Direction::Decrement,
    }
}

fn checked_index(session: &WarikanSession<'_>, index: usize, line: usize) -> CliResult<usize> {
    let capacity = session.roster().capacity();
    if index < capacity {
        Ok(index)
    } else {
        Err(format!(
            "line {line}: {}",
            warikan_i18n::slot_out_of_range(index, capacity)
        )
        .into())
    }
}

fn render(session: &WarikanSession<'_>) -> String {
    RosterPresenter::render(
        session.roster(),
        session.total_amount(),
        session.rounding_unit(),
    )
}

/// Applies every command of `script` to `session` and returns the text to
/// print. Stops at the first command that fails.
pub(crate) fn execute(session: &mut WarikanSession<'_>, script: &Script<'_>) -> CliResult<String> {
    let mut output = String::new();
    let mut shown = false;

    for command in &script.commands {
        let line = command.line;
        match command.command {
            Command::Total(text) => {
                let total = session.set_total_amount(text);
                tracing::debug!(line, total = %total, "Total amount set");
            }
            Command::Unit(text) => {
                session
                    .set_rounding_unit(text)
                    .map_err(|err| format!("line {line}: {}", format_validation_error(&err)))?;
            }
            Command::Count { index, step } => {
                let index = checked_index(session, index, line)?;
                session.adjust_count(index, direction(step));
            }
            Command::Amount { index, step } => {
                let index = checked_index(session, index, line)?;
                session.adjust_amount(index, direction(step));
            }
            Command::Load(token) => {
                session
                    .load_weights(token)
                    .map_err(|err| format!("line {line}: {}", format_load_error(&err)))?;
            }
            Command::Export => {
                let _ = writeln!(
                    &mut output,
                    "{}: {}",
                    warikan_i18n::WEIGHT_TOKEN,
                    session.export_weights()
                );
            }
            Command::Warikan => session.warikan(),
            Command::Show => {
                output.push_str(&render(session));
                shown = true;
            }
        }
    }

    if !shown {
        output.push_str(&render(session));
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;
    use warikan_application::WeightTokenCodec;
    use warikan_domain::{DEFAULT_ROSTER_SIZE, Money, RoundingUnit, WeightRecord};
    use warikan_infrastructure::LzStringCompressor;
    use warikan_parser::parse_script;

    #[fixture]
    fn session() -> WarikanSession<'static> {
        WarikanSession::new(
            WeightTokenCodec::new(&LzStringCompressor),
            DEFAULT_ROSTER_SIZE,
            RoundingUnit::DEFAULT,
        )
        .expect("valid capacity")
    }

    #[rstest]
    fn runs_uniform_split(mut session: WarikanSession<'static>) {
        let source = "total 10,000\ncount 0 +\ncount 1 +\nwarikan\n";
        let script = parse_script(source).expect("parses");
        let output = execute(&mut session, &script).expect("runs");

        assert!(output.contains("Leftover: 1,000 yen"), "{output}");
        assert!(output.contains("[0] x2 3,000 yen"), "{output}");
        assert!(output.contains("[1] x1 3,000 yen"), "{output}");
        assert_eq!(session.leftover(), Money::from_i64(1000));
    }

    #[rstest]
    fn exported_token_loads_back(mut session: WarikanSession<'static>) {
        let token = WeightTokenCodec::new(&LzStringCompressor).encode(&[
            WeightRecord::new("A", Decimal::TWO),
            WeightRecord::new("B", Decimal::ONE),
        ]);
        let source = format!("total 9000\nload {token}\nwarikan\nexport\n");
        let script = parse_script(&source).expect("parses");
        let output = execute(&mut session, &script).expect("runs");

        assert!(output.contains(&format!("Weights: {token}")), "{output}");
        assert!(output.contains("| A (2)\n[0] x1 6,000 yen"), "{output}");
        assert!(output.contains("| B (1)\n[1] x1 3,000 yen"), "{output}");
    }

    #[rstest]
    fn show_suppresses_final_summary(mut session: WarikanSession<'static>) {
        let script = parse_script("show\nshow").expect("parses");
        let output = execute(&mut session, &script).expect("runs");
        assert_eq!(output.matches("Leftover:").count(), 2);
    }

    #[rstest]
    #[case::slot_out_of_range("count 12 +", "line 1:")]
    #[case::zero_unit("total 1\nunit 0", "line 2: Rounding unit must be at least 1")]
    #[case::huge_unit("unit 99999999999999999999", "line 1: Rounding unit 18446744073709551615")]
    #[case::bad_token("load not-a-valid-token", "line 1: Could not read the weight token")]
    fn failures_report_line(
        mut session: WarikanSession<'static>,
        #[case] source: &str,
        #[case] expected_prefix: &str,
    ) {
        let script = parse_script(source).expect("parses");
        let err = execute(&mut session, &script).expect_err("should fail");
        assert!(err.starts_with(expected_prefix), "{err}");
    }
}
