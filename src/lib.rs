//! HORSE TRACKER — betting kiosk
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod inventory;
pub mod roster;
pub mod engine;
pub mod cli;
