use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Player-visible state of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    #[default]
    Hidden,
    Opened,
    Marked,
    /// Mine revealed by the end-of-game reveal, never produced during play.
    Mine,
}

impl TileStatus {
    pub const fn is_unopened(self) -> bool {
        matches!(self, Self::Hidden | Self::Marked)
    }
}

/// What a tile holds. The count of a non-mine tile is only meaningful once it is opened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileContent {
    Mine,
    Count(u8),
}

impl Default for TileContent {
    fn default() -> Self {
        Self::Count(0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Coord2,
    pub status: TileStatus,
    pub content: TileContent,
}

impl Tile {
    pub const fn new(position: Coord2) -> Self {
        Self {
            position,
            status: TileStatus::Hidden,
            content: TileContent::Count(0),
        }
    }

    pub const fn is_mine(&self) -> bool {
        matches!(self.content, TileContent::Mine)
    }

    pub const fn is_marked(&self) -> bool {
        matches!(self.status, TileStatus::Marked)
    }

    pub const fn is_opened(&self) -> bool {
        matches!(self.status, TileStatus::Opened)
    }

    /// Adjacent mine count to display, only for opened non-mine tiles.
    pub const fn visible_count(&self) -> Option<u8> {
        match (self.status, self.content) {
            (TileStatus::Opened, TileContent::Count(count)) => Some(count),
            _ => None,
        }
    }
}
