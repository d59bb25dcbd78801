#![warn(clippy::uninlined_format_args)]

pub mod error;
mod i18n;
pub mod numeric;

pub use error::{Expected, ParseError, SchemaIssue, ScriptError};
pub use numeric::{parse_json, parse_strict_number, sanitize_digits};

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit1, space0, space1},
    combinator::{map_res, rest},
};

/// `+` / `-` button of a roster line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Plus,
    Minus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Free-form total amount text.
    Total(&'a str),
    /// Free-form rounding unit text.
    Unit(&'a str),
    Count { index: usize, step: Step },
    Amount { index: usize, step: Step },
    Load(&'a str),
    Export,
    Warikan,
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandWithLine<'a> {
    pub line: usize,
    pub command: Command<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script<'a> {
    pub commands: Vec<CommandWithLine<'a>>,
}

fn step(input: &str) -> IResult<&str, Step> {
    alt((char('+').map(|_| Step::Plus), char('-').map(|_| Step::Minus))).parse(input)
}

fn slot_index(input: &str) -> IResult<&str, usize> {
    map_res(digit1, str::parse::<usize>).parse(input)
}

fn argument(input: &str) -> IResult<&str, &str> {
    (space1, rest).map(|(_, text): (_, &str)| text.trim()).parse(input)
}

fn total(input: &str) -> IResult<&str, Command<'_>> {
    (alt((tag_no_case("total"), tag("合計"))), argument)
        .map(|(_, text)| Command::Total(text))
        .parse(input)
}

fn unit(input: &str) -> IResult<&str, Command<'_>> {
    (alt((tag_no_case("unit"), tag("単位"))), argument)
        .map(|(_, text)| Command::Unit(text))
        .parse(input)
}

fn count(input: &str) -> IResult<&str, Command<'_>> {
    (tag_no_case("count"), space1, slot_index, space1, step)
        .map(|(_, _, index, _, step)| Command::Count { index, step })
        .parse(input)
}

fn amount(input: &str) -> IResult<&str, Command<'_>> {
    (tag_no_case("amount"), space1, slot_index, space1, step)
        .map(|(_, _, index, _, step)| Command::Amount { index, step })
        .parse(input)
}

fn load(input: &str) -> IResult<&str, Command<'_>> {
    (tag_no_case("load"), argument)
        .map(|(_, token)| Command::Load(token))
        .parse(input)
}

fn command(input: &str) -> IResult<&str, Command<'_>> {
    alt((
        total,
        unit,
        count,
        amount,
        load,
        tag_no_case("export").map(|_| Command::Export),
        alt((tag_no_case("warikan"), tag("割り勘"))).map(|_| Command::Warikan),
        tag_no_case("show").map(|_| Command::Show),
    ))
    .parse(input)
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("//")
}

/// Parses a line-oriented session script. Blank lines and lines starting
/// with `#` or `//` are skipped.
pub fn parse_script(input: &str) -> Result<Script<'_>, ScriptError> {
    let mut commands = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || is_comment(line) {
            continue;
        }

        match (command, space0).parse(line) {
            Ok((rest, (command, _))) => {
                if !rest.is_empty() {
                    return Err(ScriptError::SyntaxError {
                        line: idx + 1,
                        detail: i18n::syntax_error_unparsed_detail(rest),
                    });
                }
                commands.push(CommandWithLine {
                    line: idx + 1,
                    command,
                });
            }
            Err(e) => {
                return Err(ScriptError::SyntaxError {
                    line: idx + 1,
                    detail: i18n::syntax_error_detail(e),
                });
            }
        }
    }

    Ok(Script { commands })
}
