//! Payout planner.
//!
//! Greedy, largest-denomination-first bill selection against the current
//! inventory. This is intentionally not an optimal change-making search:
//! the dispensing report must match the greedy result exactly.

use tracing::debug;

use crate::inventory::Inventory;
use crate::types::{PayoutPlan, DENOMINATIONS};

/// Plan how to pay `amount` from `inventory`.
///
/// Returns `None` when the greedy pass cannot cover the full amount. No
/// partial plan is ever returned, and the inventory is only read.
pub fn plan_payout(amount: u64, inventory: &Inventory) -> Option<PayoutPlan> {
    let mut plan = PayoutPlan::new();
    let mut remaining = amount;

    for &denomination in DENOMINATIONS.iter().rev() {
        let available = inventory.quantity_of(denomination).ok()?;
        let needed = remaining / u64::from(denomination);
        let used = needed.min(u64::from(available));
        remaining -= used * u64::from(denomination);
        // used <= available, which is a u32
        plan.record(denomination, used as u32);
    }

    if remaining > 0 {
        debug!(amount, remaining, "Payout plan infeasible");
        return None;
    }

    debug!(amount, plan = ?plan, "Payout planned");
    Some(plan)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
