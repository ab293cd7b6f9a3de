//! Operator console — command parsing and the interactive loop.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::{execute, run, Flow};
