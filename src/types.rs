//! Shared types for the betting kiosk.
//!
//! These types form the data model used across all modules.
//! Inventory, roster, and engine modules depend on them without
//! depending on each other's internals.

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Bill face values the kiosk stocks, ascending.
pub const DENOMINATIONS: [u32; 5] = [1, 5, 10, 20, 100];

/// Quantity every denomination is reset to on restock.
pub const DEFAULT_RESTOCK_QUANTITY: u32 = 10;

// ---------------------------------------------------------------------------
// Bill
// ---------------------------------------------------------------------------

/// A stack of bills of a single denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bill {
    pub denomination: u32,
    pub quantity: u32,
}

impl Bill {
    pub fn new(denomination: u32, quantity: u32) -> Self {
        Self {
            denomination,
            quantity,
        }
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${},{}", self.denomination, self.quantity)
    }
}

// ---------------------------------------------------------------------------
// Horse
// ---------------------------------------------------------------------------

/// A horse on the roster. `is_winner` is the only field that changes
/// after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Horse {
    pub number: u32,
    pub name: String,
    /// Payout multiplier applied to the bet amount.
    pub odds: u32,
    pub is_winner: bool,
}

impl Horse {
    pub fn new(number: u32, name: impl Into<String>, odds: u32) -> Self {
        Self {
            number,
            name: name.into(),
            odds,
            is_winner: false,
        }
    }
}

impl fmt::Display for Horse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.number,
            self.name,
            self.odds,
            if self.is_winner { "won" } else { "lost" }
        )
    }
}

// ---------------------------------------------------------------------------
// Payout plan & payout
// ---------------------------------------------------------------------------

/// Denomination → bill count chosen by the payout planner.
///
/// Only non-zero counts are stored; a denomination absent from the plan
/// dispenses zero bills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayoutPlan {
    bills: BTreeMap<u32, u32>,
}

impl PayoutPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` bills of `denomination`. Zero is a no-op.
    pub fn record(&mut self, denomination: u32, count: u32) {
        if count > 0 {
            *self.bills.entry(denomination).or_insert(0) += count;
        }
    }

    /// Bills of `denomination` in the plan (zero if absent).
    pub fn count(&self, denomination: u32) -> u32 {
        self.bills.get(&denomination).copied().unwrap_or(0)
    }

    /// Non-zero entries, ascending by denomination.
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.bills.iter().map(|(&d, &c)| (d, c))
    }

    /// Cash value of the plan.
    pub fn total(&self) -> u64 {
        self.entries()
            .map(|(d, c)| u64::from(d) * u64::from(c))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }
}

/// Renders the dispensing block, largest denomination first, zero counts
/// included.
impl fmt::Display for PayoutPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dispensing:")?;
        for &denomination in DENOMINATIONS.iter().rev() {
            write!(f, "\n${},{}", denomination, self.count(denomination))?;
        }
        Ok(())
    }
}

/// A successful bet: who won, how much, and which bills left the till.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    pub horse_number: u32,
    pub horse_name: String,
    pub winnings: u64,
    pub plan: PayoutPlan,
}

impl fmt::Display for Payout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payout: {},${}\n{}", self.horse_name, self.winnings, self.plan)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Inventory failures. Both indicate a bug in the caller, never bad input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Unknown denomination: ${0}")]
    UnknownDenomination(u32),

    #[error("Overdraw of ${denomination} bills: need {requested}, have {available}")]
    Overdraw {
        denomination: u32,
        requested: u32,
        available: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Invalid Horse Number: {0}")]
    InvalidHorseNumber(i64),
}

/// Every way a bet can end without a payout.
///
/// `Display` renders the exact report line shown to the bettor.
/// `NoPayout` and `InsufficientFunds` are business outcomes rather than
/// input errors, but they travel the same non-fatal path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BetError {
    #[error("Invalid Horse Number: {0}")]
    InvalidHorseNumber(i64),

    #[error("Invalid Bet: {}", bet_amount_display(.0))]
    InvalidBetAmount(Decimal),

    #[error("No Payout: {0}")]
    NoPayout(String),

    #[error("Insufficient Funds: {0}")]
    InsufficientFunds(Decimal),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl BetError {
    /// Whether this is a legitimate betting outcome rather than rejected input.
    pub fn is_business_outcome(&self) -> bool {
        matches!(self, BetError::NoPayout(_) | BetError::InsufficientFunds(_))
    }
}

/// Render a rejected bet amount the way the kiosk has always printed it:
/// whole numbers keep a trailing `.0` (`-3.0`), fractions are minimal
/// (`10.5`), and magnitudes at or above 10^7 or below 10^-3 switch to
/// `E` notation (`1.2345678E7`).
pub fn bet_amount_display(amount: &Decimal) -> String {
    let amount = amount.normalize();
    if amount.is_zero() {
        return "0.0".to_string();
    }

    let magnitude = amount.abs();
    if magnitude >= Decimal::from(10_000_000) || magnitude < Decimal::new(1, 3) {
        let sign = if amount.is_sign_negative() { "-" } else { "" };
        let digits = amount.mantissa().unsigned_abs().to_string();
        let exponent = digits.len() as i64 - 1 - i64::from(amount.scale());
        let (lead, rest) = digits.split_at(1);
        let rest = rest.trim_end_matches('0');
        let rest = if rest.is_empty() { "0" } else { rest };
        return format!("{sign}{lead}.{rest}E{exponent}");
    }

    if amount.fract().is_zero() {
        format!("{amount}.0")
    } else {
        amount.to_string()
    }
}

impl From<RosterError> for BetError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::InvalidHorseNumber(n) => BetError::InvalidHorseNumber(n),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
