// src/config.rs

//! Configuration for laying out and drawing seals.
//!
//! `SealConfig` can be deserialized from JSON. Every field has a default, so
//! a partial file (or `{}`) is a valid configuration:
//!
//! ```json
//! { "cell_size": 4, "column_direction": "left", "level": 3 }
//! ```

use crate::error::SealError;
use crate::geometry::Orientation;
use crate::table;
use anyhow::Context;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Side on which the next item is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The axis items advance along.
    pub const fn orientation(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }
}

impl FromStr for Direction {
    type Err = SealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(SealError::InvalidDirection(s.to_string())),
        }
    }
}

/// How a field's content is turned into glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// The whole field is one integer and one glyph.
    #[default]
    Number,
    /// One glyph per character, keyed by its code point; `'\n'` starts a new
    /// row.
    Text,
}

/// Layout and drawing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SealConfig {
    /// Pixels per grid cell.
    pub cell_size: u32,
    /// Where the next glyph of a row goes.
    pub column_direction: Direction,
    /// Where the next row goes.
    pub row_direction: Direction,
    /// Grid level used to encode values.
    pub level: u8,
    /// Blank cells between neighbouring glyphs and rows.
    pub spacing: i32,
    /// Sub-encoder for field content.
    pub fields: FieldKind,
}

impl Default for SealConfig {
    fn default() -> Self {
        SealConfig {
            cell_size: 2,
            column_direction: Direction::Right,
            row_direction: Direction::Down,
            level: 4,
            spacing: 1,
            fields: FieldKind::Number,
        }
    }
}

impl SealConfig {
    /// Checks values serde cannot: cell size, level and spacing.
    pub fn validate(&self) -> Result<(), SealError> {
        if self.cell_size == 0 {
            return Err(SealError::InvalidCellSize(self.cell_size));
        }
        table::lookup(self.level)?;
        if self.spacing < 0 {
            return Err(SealError::InvalidValue(format!("spacing {}", self.spacing)));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: SealConfig =
            serde_json::from_str(json).context("Failed to parse seal configuration")?;
        config
            .validate()
            .context("Seal configuration failed validation")?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded seal configuration from {}", path.display());
        Ok(config)
    }

    /// Like [`SealConfig::load`], falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}. Using default seal configuration.", e);
                Self::default()
            }
        }
    }
}
