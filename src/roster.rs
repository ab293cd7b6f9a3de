//! Horse roster.
//!
//! A fixed, number-ordered list of horses. The winner flag is the only
//! mutable state and exactly one horse carries it after any successful
//! `set_winner`.

use std::fmt;
use tracing::info;

use crate::types::{Horse, RosterError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    horses: Vec<Horse>,
    winning_number: Option<u32>,
}

impl Roster {
    /// Build a roster ordered by ascending horse number. Winner flags on
    /// the input are discarded; call `set_winner` to pick one.
    pub fn new(mut horses: Vec<Horse>) -> Self {
        horses.sort_by_key(|h| h.number);
        for horse in &mut horses {
            horse.is_winner = false;
        }
        Self {
            horses,
            winning_number: None,
        }
    }

    /// Mark `number` as the sole winner.
    ///
    /// Unknown numbers (including ones that cannot be a horse number at
    /// all, like negatives) leave the roster and the previous winner as
    /// they were.
    pub fn set_winner(&mut self, number: i64) -> Result<(), RosterError> {
        let target = match u32::try_from(number) {
            Ok(n) if self.lookup(n).is_some() => n,
            _ => {
                info!(number, "Rejected winner: no such horse");
                return Err(RosterError::InvalidHorseNumber(number));
            }
        };

        for horse in &mut self.horses {
            horse.is_winner = horse.number == target;
        }
        self.winning_number = Some(target);

        info!(number = target, "Winning horse set");
        Ok(())
    }

    /// Find a horse by number. Searches by equality so gaps in the
    /// numbering are fine.
    pub fn lookup(&self, number: u32) -> Option<&Horse> {
        self.horses.iter().find(|h| h.number == number)
    }

    /// Horses in ascending-number order.
    pub fn all(&self) -> &[Horse] {
        &self.horses
    }

    pub fn winner(&self) -> Option<&Horse> {
        self.winning_number.and_then(|n| self.lookup(n))
    }

    pub fn winning_number(&self) -> Option<u32> {
        self.winning_number
    }

    pub fn len(&self) -> usize {
        self.horses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.horses.is_empty()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Horses:")?;
        for horse in &self.horses {
            write!(f, "\n{horse}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
