//! Configuration loading from TOML.
//!
//! Reads `horse_tracker.toml` and deserializes into strongly-typed structs.
//! Every field has a default, so a missing file or a partial one yields
//! the reference kiosk: ten of each bill and the seven-horse roster.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::types::DEFAULT_RESTOCK_QUANTITY;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "horse_tracker.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub machine: MachineConfig,
    /// Roster entries, deserialized from `[[horses]]` tables.
    pub horses: Vec<HorseConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            machine: MachineConfig::default(),
            horses: default_horses(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MachineConfig {
    /// Quantity of each denomination after a restock (and at startup).
    pub restock_quantity: u32,
    /// Horse number holding the winner flag at startup.
    pub initial_winner: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            restock_quantity: DEFAULT_RESTOCK_QUANTITY,
            initial_winner: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HorseConfig {
    pub number: u32,
    pub name: String,
    pub odds: u32,
}

impl HorseConfig {
    pub fn new(number: u32, name: &str, odds: u32) -> Self {
        Self {
            number,
            name: name.to_string(),
            odds,
        }
    }
}

/// The reference seven-horse roster.
pub fn default_horses() -> Vec<HorseConfig> {
    vec![
        HorseConfig::new(1, "That Darn Gray Cat", 5),
        HorseConfig::new(2, "Fort Utopia", 10),
        HorseConfig::new(3, "Count Sheep", 9),
        HorseConfig::new(4, "Ms Traitour", 4),
        HorseConfig::new(5, "Real Princess", 3),
        HorseConfig::new(6, "Pa Kettle", 5),
        HorseConfig::new(7, "Gin Stinger", 6),
    ]
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Reject configurations the kiosk cannot run with.
    pub fn validate(&self) -> Result<()> {
        let horses = &self.horses;
        if horses.is_empty() {
            bail!("Roster is empty");
        }

        let mut seen = HashSet::new();
        for horse in horses {
            if horse.number == 0 {
                bail!("Horse numbers start at 1: {:?}", horse.name);
            }
            if !seen.insert(horse.number) {
                bail!("Duplicate horse number: {}", horse.number);
            }
            if horse.name.trim().is_empty() {
                bail!("Horse {} has a blank name", horse.number);
            }
            if horse.odds == 0 {
                bail!("Horse {} has zero odds", horse.number);
            }
        }

        if !seen.contains(&self.machine.initial_winner) {
            bail!(
                "Initial winner {} is not on the roster",
                self.machine.initial_winner
            );
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
