//! Demo configuration: an optional TOML file with flag overrides on top.
//!
//! The file carries raw numbers; conversion into the typed domain happens
//! once, after overrides are applied, so a bad value fails fast with the
//! offending field named instead of producing a grid that looks valid.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use veil_types::{AnchorSpec, Coord, SpaceValue};

/// File consulted when `--config` is not given. Missing is fine; defaults
/// apply.
pub const DEFAULT_CONFIG_FILE: &str = "veil.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DemoConfig {
    pub anchor_row: u8,
    pub anchor_col: u8,
    pub anchor_value: u8,
    pub center_value: u8,
    pub phase_shift: i64,
    pub probe_row: u8,
    pub probe_col: u8,
}

impl Default for DemoConfig {
    fn default() -> Self {
        // The original demo parameters: anchor row 6 / col 7 = 43 (one-based
        // in the prose, zero-based here), center 1, phase 0, probe (2, 2).
        Self {
            anchor_row: 5,
            anchor_col: 6,
            anchor_value: 43,
            center_value: 1,
            phase_shift: 0,
            probe_row: 2,
            probe_col: 2,
        }
    }
}

impl DemoConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load the default config file if present, defaults otherwise.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the anchor fields into a typed spec.
    pub fn anchor_spec(&self) -> Result<AnchorSpec> {
        let anchor = Coord::new(self.anchor_row, self.anchor_col).context("anchor coordinate")?;
        let value = SpaceValue::new(self.anchor_value).context("anchor value")?;
        let center_value = SpaceValue::new(self.center_value).context("center value")?;
        Ok(AnchorSpec::new(anchor, value).with_center_value(center_value))
    }

    /// Validate the probe fields.
    pub fn probe(&self) -> Result<Coord> {
        Coord::new(self.probe_row, self.probe_col).context("probe coordinate")
    }
}
