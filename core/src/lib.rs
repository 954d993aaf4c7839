#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Validated parameters of a single game: a square board of `size × size` tiles holding
/// `mines` mines, with at least one safe tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if mines >= mult(size, size) {
            return Err(BoardError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// Like [`BoardConfig::new`], but pulls out-of-range values back into range.
    pub fn clamped(size: Coord, mines: CellCount) -> Self {
        let size = size.max(1);
        let mines = mines.min(mult(size, size) - 1);
        Self::new_unchecked(size, mines)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mines
    }
}

/// When opening a tile spreads to its orthogonal neighbors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cascade {
    /// Spread only from tiles without adjacent mines.
    #[default]
    ZeroCount,
    /// Spread from every opened tile, stopping only at mines, marks and opened tiles. This is
    /// the classic flood behavior, where opening any safe tile keeps spreading until it is
    /// fenced in by mines or marks.
    Always,
}

/// Outcome of marking or unmarking a tile
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of opening a tile
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    Opened,
    /// The target holds a mine. The board is left untouched, ending the game is up to the
    /// caller.
    HitMine,
    /// Every safe tile is open.
    Won,
}

impl OpenOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use OpenOutcome::*;
        match self {
            NoChange => false,
            Opened => true,
            HitMine => true,
            Won => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}
