use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use mineboard_core::{BoardConfig, CellCount, Coord};
use serde::{Deserialize, Serialize};

/// Smallest board the front-end offers.
pub const MIN_SIZE: Coord = 3;

/// Player preferences kept between sessions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub size: Coord,
    pub mines: CellCount,
}

impl Default for Settings {
    fn default() -> Self {
        Self { size: 9, mines: 10 }
    }
}

impl Settings {
    /// Reads settings from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => toml::from_str(&text)
                .with_context(|| format!("Invalid settings in {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err).with_context(|| format!("Could not read {}", path.display())),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("Could not write {}", path.display()))
    }

    /// Applies command-line overrides, then pulls the result back into playable range.
    pub fn with_overrides(self, size: Option<Coord>, mines: Option<CellCount>) -> Self {
        let requested = Self {
            size: size.unwrap_or(self.size),
            mines: mines.unwrap_or(self.mines),
        };
        let config = BoardConfig::clamped(requested.size.max(MIN_SIZE), requested.mines);
        let clamped = Self {
            size: config.size,
            mines: config.mines,
        };

        if clamped != requested {
            log::warn!(
                "Adjusted {}x{} with {} mines to {}x{} with {} mines",
                requested.size,
                requested.size,
                requested.mines,
                clamped.size,
                clamped.size,
                clamped.mines
            );
        }
        clamped
    }

    /// Loads stored settings, applies overrides and writes them back only when they differ
    /// from what was stored.
    pub fn sync(
        path: &Path,
        size: Option<Coord>,
        mines: Option<CellCount>,
    ) -> anyhow::Result<Self> {
        let stored = Self::load(path)?;
        let settings = stored.with_overrides(size, mines);
        if settings != stored {
            log::info!("Saving settings to {}", path.display());
            settings.save(path)?;
        }
        Ok(settings)
    }

    pub fn board_config(&self) -> anyhow::Result<BoardConfig> {
        Ok(BoardConfig::new(self.size, self.mines)?)
    }
}
