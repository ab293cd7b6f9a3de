//! Betting engine — payout planning and bet settlement.

pub mod planner;
pub mod kiosk;

pub use kiosk::{Kiosk, Status};
pub use planner::plan_payout;
