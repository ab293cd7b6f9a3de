//! Bill inventory — the kiosk's cash drawer.
//!
//! Holds one `Bill` per fixed denomination. Quantities only change
//! through `restock` and payout dispensing; the set of denominations
//! never changes.

use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

use crate::types::{Bill, InventoryError, PayoutPlan, DENOMINATIONS, DEFAULT_RESTOCK_QUANTITY};

/// Cash drawer keyed by denomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    bills: BTreeMap<u32, Bill>,
    restock_quantity: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_RESTOCK_QUANTITY)
    }
}

impl Inventory {
    /// A fully stocked drawer that restocks to `restock_quantity`.
    pub fn new(restock_quantity: u32) -> Self {
        let bills = DENOMINATIONS
            .iter()
            .map(|&d| (d, Bill::new(d, restock_quantity)))
            .collect();
        Self {
            bills,
            restock_quantity,
        }
    }

    /// Build a drawer with explicit quantities, in `DENOMINATIONS` order
    /// (1, 5, 10, 20, 100). Restocking still resets to the default level.
    pub fn with_quantities(quantities: [u32; 5]) -> Self {
        let bills = DENOMINATIONS
            .iter()
            .zip(quantities)
            .map(|(&d, q)| (d, Bill::new(d, q)))
            .collect();
        Self {
            bills,
            restock_quantity: DEFAULT_RESTOCK_QUANTITY,
        }
    }

    /// Reset every denomination to the restock level.
    pub fn restock(&mut self) {
        for bill in self.bills.values_mut() {
            bill.quantity = self.restock_quantity;
        }
        info!(quantity = self.restock_quantity, "Inventory restocked");
    }

    pub fn quantity_of(&self, denomination: u32) -> Result<u32, InventoryError> {
        self.bills
            .get(&denomination)
            .map(|b| b.quantity)
            .ok_or(InventoryError::UnknownDenomination(denomination))
    }

    /// Remove `count` bills of `denomination`.
    ///
    /// Asking for more than is on hand means the payout planner proposed
    /// something it could not satisfy; the drawer is left untouched.
    pub fn debit(&mut self, denomination: u32, count: u32) -> Result<(), InventoryError> {
        let bill = self
            .bills
            .get_mut(&denomination)
            .ok_or(InventoryError::UnknownDenomination(denomination))?;
        bill.quantity = bill
            .quantity
            .checked_sub(count)
            .ok_or(InventoryError::Overdraw {
                denomination,
                requested: count,
                available: bill.quantity,
            })?;
        Ok(())
    }

    /// Apply a whole payout plan. Every line is checked before any
    /// quantity changes, so a failure leaves the drawer as it was.
    pub fn dispense(&mut self, plan: &PayoutPlan) -> Result<(), InventoryError> {
        for (denomination, count) in plan.entries() {
            let available = self.quantity_of(denomination)?;
            if count > available {
                return Err(InventoryError::Overdraw {
                    denomination,
                    requested: count,
                    available,
                });
            }
        }
        for (denomination, count) in plan.entries() {
            self.debit(denomination, count)?;
        }
        debug!(total = plan.total(), "Bills dispensed");
        Ok(())
    }

    /// Bills in ascending denomination order.
    pub fn bills(&self) -> impl Iterator<Item = &Bill> + '_ {
        self.bills.values()
    }

    /// Total cash on hand.
    pub fn total_value(&self) -> u64 {
        self.bills()
            .map(|b| u64::from(b.denomination) * u64::from(b.quantity))
            .sum()
    }

    pub fn restock_quantity(&self) -> u32 {
        self.restock_quantity
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Inventory:")?;
        for bill in self.bills() {
            write!(f, "\n{bill}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
