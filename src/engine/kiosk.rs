//! Kiosk — the betting engine.
//!
//! Owns the bill inventory and the horse roster, and runs every bet
//! through the same pipeline:
//! validate horse → validate amount → check winner → compute winnings →
//! plan payout → dispense. Each stage short-circuits with a `BetError`;
//! the inventory is only touched once a complete plan exists.

use rust_decimal::prelude::*;
use std::fmt;
use tracing::info;

use super::planner::plan_payout;
use crate::config::AppConfig;
use crate::inventory::Inventory;
use crate::roster::Roster;
use crate::types::{BetError, Horse, Payout, RosterError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kiosk {
    inventory: Inventory,
    roster: Roster,
}

impl Default for Kiosk {
    fn default() -> Self {
        let cfg = AppConfig::default();
        let mut roster = roster_from(&cfg);
        let outcome = roster.set_winner(i64::from(cfg.machine.initial_winner));
        debug_assert!(
            outcome.is_ok(),
            "reference roster must contain the initial winner"
        );
        Self::new(Inventory::new(cfg.machine.restock_quantity), roster)
    }
}

fn roster_from(cfg: &AppConfig) -> Roster {
    Roster::new(
        cfg.horses
            .iter()
            .map(|h| Horse::new(h.number, h.name.clone(), h.odds))
            .collect(),
    )
}

impl Kiosk {
    pub fn new(inventory: Inventory, roster: Roster) -> Self {
        Self { inventory, roster }
    }

    /// Build a stocked kiosk with the configured roster and starting winner.
    /// The config is validated first, so duplicate numbers or zero odds
    /// never reach the engine.
    pub fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        cfg.validate()?;
        let mut roster = roster_from(cfg);
        roster.set_winner(i64::from(cfg.machine.initial_winner))?;
        Ok(Self::new(
            Inventory::new(cfg.machine.restock_quantity),
            roster,
        ))
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn restock(&mut self) {
        self.inventory.restock();
    }

    pub fn set_winner(&mut self, horse_number: i64) -> Result<(), RosterError> {
        self.roster.set_winner(horse_number)
    }

    /// Settle a bet on `horse_number`.
    pub fn place_bet(&mut self, horse_number: i64, amount: Decimal) -> Result<Payout, BetError> {
        let horse = u32::try_from(horse_number)
            .ok()
            .and_then(|n| self.roster.lookup(n))
            .ok_or(BetError::InvalidHorseNumber(horse_number))?;

        if amount <= Decimal::ZERO || !amount.fract().is_zero() {
            return Err(BetError::InvalidBetAmount(amount.normalize()));
        }

        if !horse.is_winner {
            info!(horse = horse.number, amount = %amount, "Losing bet");
            return Err(BetError::NoPayout(horse.name.clone()));
        }

        let winnings = amount
            .checked_mul(Decimal::from(horse.odds))
            .map(|w| w.floor());
        let Some(winnings_bills) = winnings.and_then(|w| w.to_u64()) else {
            // Too large to represent, and therefore to pay.
            let shown = winnings.unwrap_or(Decimal::MAX).normalize();
            info!(horse = horse.number, winnings = %shown, "Winnings out of range");
            return Err(BetError::InsufficientFunds(shown));
        };

        let Some(plan) = plan_payout(winnings_bills, &self.inventory) else {
            info!(
                horse = horse.number,
                winnings = winnings_bills,
                cash_on_hand = self.inventory.total_value(),
                "Insufficient funds for payout"
            );
            return Err(BetError::InsufficientFunds(Decimal::from(winnings_bills)));
        };

        let payout = Payout {
            horse_number: horse.number,
            horse_name: horse.name.clone(),
            winnings: winnings_bills,
            plan,
        };

        self.inventory.dispense(&payout.plan)?;

        info!(
            horse = payout.horse_number,
            winnings = payout.winnings,
            "Payout dispensed"
        );
        Ok(payout)
    }

    /// Inventory and roster, in the kiosk's status layout.
    pub fn status(&self) -> Status<'_> {
        Status { kiosk: self }
    }
}

/// Borrowed view rendering the status dump.
pub struct Status<'a> {
    kiosk: &'a Kiosk,
}

impl fmt::Display for Status<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.kiosk.inventory, self.kiosk.roster)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
