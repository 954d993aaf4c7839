use alloc::collections::VecDeque;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of tiles, stored row-major and addressed by `(x, y)`.
///
/// Operations mutate the board in place and report what happened; [`crate::open_tile`] and
/// friends wrap them for callers that prefer to hand the board over by value.
///
/// Tiles are read-only from outside; only the board's own operations change them.
///
/// ```compile_fail
/// use mineboard_core::*;
///
/// let mut board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
/// board[(1, 1)].content = TileContent::Mine;
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    tiles: Array2<Tile>,
    size: Coord,
    mine_count: CellCount,
    cascade: Cascade,
}

impl Board {
    /// Deals a fresh board, placing mines where `generator` says.
    pub fn new(config: BoardConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        let mines = generator.generate(config)?;
        let mut board = Self::blank(config.size)?;

        for &coords in &mines {
            let coords = board.validate_coords(coords)?;
            board.tile_mut(coords).content = TileContent::Mine;
        }

        let mine_count = board.count_tiles(Tile::is_mine);
        if mine_count >= board.total_tiles() {
            return Err(BoardError::TooManyMines);
        }
        board.mine_count = mine_count;

        log::debug!(
            "New {}x{} board with {} mines",
            board.size,
            board.size,
            board.mine_count
        );
        Ok(board)
    }

    /// Board of hidden, mine-free tiles.
    pub fn blank(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(BoardError::EmptyBoard);
        }

        let dim = usize::from(size);
        // x, y < size <= Coord::MAX
        let tiles = Array2::from_shape_fn((dim, dim), |(y, x)| Tile::new((x as Coord, y as Coord)));

        Ok(Self {
            tiles,
            size,
            mine_count: 0,
            cascade: Cascade::default(),
        })
    }

    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mines = CellCount::try_from(mine_coords.len()).map_err(|_| BoardError::TooManyMines)?;
        Self::new(
            BoardConfig::new_unchecked(size, mines),
            FixedMinefieldGenerator::new(mine_coords),
        )
    }

    /// Adopts an existing grid, e.g. one restored by a collaborator. Every tile must sit at
    /// the position it records.
    pub fn from_tiles(tiles: Array2<Tile>) -> Result<Self> {
        let (rows, cols) = tiles.dim();
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if rows != cols {
            return Err(BoardError::InvalidBoardShape);
        }
        let size = Coord::try_from(rows).map_err(|_| BoardError::InvalidBoardShape)?;

        let misplaced = tiles
            .indexed_iter()
            .any(|((y, x), tile)| tile.position != (x as Coord, y as Coord));
        if misplaced {
            return Err(BoardError::InvalidBoardShape);
        }

        let mut board = Self {
            tiles,
            size,
            mine_count: 0,
            cascade: Cascade::default(),
        };
        board.mine_count = board.count_tiles(Tile::is_mine);
        if board.mine_count >= board.total_tiles() {
            return Err(BoardError::TooManyMines);
        }
        Ok(board)
    }

    pub fn with_cascade(mut self, cascade: Cascade) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn cascade(&self) -> Cascade {
        self.cascade
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_tiles(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mine_count
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size) {
            Ok(coords)
        } else {
            Err(BoardError::InvalidCoords)
        }
    }

    pub fn tile(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    /// Tiles in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tiles grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Tile>> {
        self.tiles.rows().into_iter().map(|row| row.into_iter())
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        self.tile(coords).map(Tile::is_mine)
    }

    pub fn is_marked(&self, coords: Coord2) -> Result<bool> {
        self.tile(coords).map(Tile::is_marked)
    }

    pub fn is_opened(&self, coords: Coord2) -> Result<bool> {
        self.tile(coords).map(Tile::is_opened)
    }

    /// Mines among the up to 8 surrounding tiles.
    pub fn count_mines_around(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.adjacent_mine_count(coords))
    }

    pub fn count_opened_tiles(&self) -> CellCount {
        self.count_tiles(Tile::is_opened)
    }

    pub fn count_marked_tiles(&self) -> CellCount {
        self.count_tiles(Tile::is_marked)
    }

    /// Mine count minus marks, negative when the player over-marks.
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.count_marked_tiles() as isize)
    }

    pub fn is_won(&self) -> bool {
        self.count_opened_tiles() == self.safe_tiles()
    }

    /// Opens a hidden safe tile and cascades through its orthogonal neighbors according to
    /// the board's [`Cascade`] rule.
    pub fn open(&mut self, coords: Coord2) -> Result<OpenOutcome> {
        let coords = self.validate_coords(coords)?;
        let tile = self[coords];

        if tile.status != TileStatus::Hidden {
            return Ok(OpenOutcome::NoChange);
        }
        if tile.is_mine() {
            return Ok(OpenOutcome::HitMine);
        }

        let opened = self.flood_open(coords);
        log::debug!("Opening {:?} opened {} tiles", coords, opened);

        Ok(if self.is_won() {
            OpenOutcome::Won
        } else {
            OpenOutcome::Opened
        })
    }

    pub fn mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let tile = self.tile_mut(coords);

        Ok(match tile.status {
            TileStatus::Opened | TileStatus::Marked => MarkOutcome::NoChange,
            TileStatus::Hidden | TileStatus::Mine => {
                tile.status = TileStatus::Marked;
                MarkOutcome::Changed
            }
        })
    }

    pub fn unmark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;
        let tile = self.tile_mut(coords);

        Ok(if tile.is_marked() {
            tile.status = TileStatus::Hidden;
            MarkOutcome::Changed
        } else {
            MarkOutcome::NoChange
        })
    }

    pub fn toggle_mark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        if self.is_marked(coords)? {
            self.unmark(coords)
        } else {
            self.mark(coords)
        }
    }

    /// End-of-game reveal: mines get [`TileStatus::Mine`], everything else is opened.
    pub fn open_all(&mut self) {
        for y in 0..self.size {
            for x in 0..self.size {
                let coords = (x, y);
                if self[coords].is_mine() {
                    self.tile_mut(coords).status = TileStatus::Mine;
                } else {
                    let count = self.adjacent_mine_count(coords);
                    self.open_single_tile(coords, count);
                }
            }
        }
    }

    fn flood_open(&mut self, start: Coord2) -> CellCount {
        let mut opened: CellCount = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let tile = self[coords];
            if tile.status != TileStatus::Hidden || tile.is_mine() {
                continue;
            }

            let count = self.adjacent_mine_count(coords);
            self.open_single_tile(coords, count);
            opened += 1;

            let spread = match self.cascade {
                Cascade::ZeroCount => count == 0,
                Cascade::Always => true,
            };
            if spread {
                to_visit.extend(
                    NeighborIter::orthogonal(coords, self.size)
                        .filter(|&pos| self[pos].status == TileStatus::Hidden),
                );
            }
        }

        opened
    }

    fn open_single_tile(&mut self, coords: Coord2, count: u8) {
        let tile = self.tile_mut(coords);
        tile.status = TileStatus::Opened;
        tile.content = TileContent::Count(count);
    }

    fn tile_mut(&mut self, coords: Coord2) -> &mut Tile {
        &mut self.tiles[coords.to_nd_index()]
    }

    fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        NeighborIter::around(coords, self.size)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    fn count_tiles(&self, predicate: impl Fn(&Tile) -> bool) -> CellCount {
        // a board has at most Coord::MAX² tiles
        self.tiles.iter().filter(|&tile| predicate(tile)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

/// Serialized form of a [`Board`]. Size and mine count are derived from the grid again on
/// the way back in.
#[derive(Serialize, Deserialize)]
struct BoardSnapshot {
    tiles: Array2<Tile>,
    cascade: Cascade,
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        Self {
            tiles: board.tiles,
            cascade: board.cascade,
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = BoardError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self> {
        Ok(Board::from_tiles(snapshot.tiles)?.with_cascade(snapshot.cascade))
    }
}
