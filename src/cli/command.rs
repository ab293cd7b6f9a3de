//! Command-line parsing for the kiosk prompt.

use rust_decimal::Decimal;
use std::str::FromStr;

/// One parsed line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Restock,
    Quit,
    SetWinner(i64),
    Bet { horse: i64, amount: Decimal },
    /// Unrecognised or malformed input, kept verbatim (trimmed) for the report.
    Invalid(String),
}

impl Command {
    /// Parse a raw input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let input = line.trim();
        if input.is_empty() {
            return None;
        }
        if input.eq_ignore_ascii_case("r") {
            return Some(Command::Restock);
        }
        if input.eq_ignore_ascii_case("q") {
            return Some(Command::Quit);
        }

        let tokens: Vec<&str> = input.split_whitespace().collect();
        let invalid = || Command::Invalid(input.to_string());

        let command = match tokens.as_slice() {
            // Any first token starting with `w` selects the winner command.
            [w, rest @ ..] if starts_with_w(w) => match rest {
                [number] => parse_horse_number(number)
                    .map(Command::SetWinner)
                    .unwrap_or_else(invalid),
                _ => invalid(),
            },
            [horse, amount] => match (parse_horse_number(horse), parse_amount(amount)) {
                (Some(horse), Some(amount)) => Command::Bet { horse, amount },
                _ => invalid(),
            },
            _ => invalid(),
        };
        Some(command)
    }
}

fn starts_with_w(token: &str) -> bool {
    token.starts_with(['w', 'W'])
}

/// Horse numbers are 32-bit signed integers; anything wider is malformed.
fn parse_horse_number(token: &str) -> Option<i64> {
    token.parse::<i32>().ok().map(i64::from)
}

/// Bet amounts accept plain decimals (`10`, `10.5`) and scientific
/// notation (`1e2`). Only sign, digit, point, and exponent characters are
/// allowed, so digit separators like `1_0` are rejected.
fn parse_amount(token: &str) -> Option<Decimal> {
    let well_formed = token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !well_formed {
        return None;
    }
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
