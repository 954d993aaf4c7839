use super::*;

/// Mines at caller-chosen positions, for replays and hand-built boards.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: &[Coord2]) -> Self {
        Self {
            mines: mines.to_vec(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(mut self, config: BoardConfig) -> Result<Vec<Coord2>> {
        if config.size == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if self.mines.iter().any(|&pos| !in_bounds(pos, config.size)) {
            return Err(BoardError::InvalidCoords);
        }

        self.mines.sort_unstable();
        self.mines.dedup();

        if self.mines.len() >= usize::from(config.total_tiles()) {
            return Err(BoardError::TooManyMines);
        }
        if self.mines.len() != usize::from(config.mines) {
            log::warn!(
                "Fixed layout has {} mines, config asked for {}",
                self.mines.len(),
                config.mines
            );
        }
        Ok(self.mines)
    }
}
