//! Interactive session — the read → dispatch → report loop.
//!
//! Every command except `Q` ends with a full status dump, whether it
//! succeeded, was rejected, or produced no payout.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use super::command::Command;
use crate::engine::Kiosk;

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command to the kiosk and write its report plus the status.
pub fn execute<W: Write>(kiosk: &mut Kiosk, command: Command, out: &mut W) -> Result<Flow> {
    debug!(command = ?command, "Executing command");

    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Restock => kiosk.restock(),
        Command::SetWinner(number) => {
            if let Err(e) = kiosk.set_winner(number) {
                writeln!(out, "{e}")?;
            }
        }
        Command::Bet { horse, amount } => match kiosk.place_bet(horse, amount) {
            Ok(payout) => writeln!(out, "{payout}")?,
            Err(e) => {
                if e.is_business_outcome() {
                    info!(horse, outcome = %e, "Bet settled without payout");
                } else {
                    debug!(horse, error = %e, "Bet rejected");
                }
                writeln!(out, "{e}")?
            }
        },
        Command::Invalid(raw) => writeln!(out, "Invalid Command: {raw}")?,
    }

    writeln!(out, "{}", kiosk.status())?;
    out.flush().context("Failed to flush output")?;
    Ok(Flow::Continue)
}

/// Run the kiosk until `Q` or end of input.
///
/// The status is printed once before the first command is read.
pub fn run<R: BufRead, W: Write>(kiosk: &mut Kiosk, mut input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{}", kiosk.status()).context("Failed to write status")?;
    out.flush().context("Failed to flush output")?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read command")?;
        if read == 0 {
            debug!("End of input");
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let Some(command) = Command::parse(&line) else {
            continue;
        };
        if execute(kiosk, command, out)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
