//! Board-in, board-out wrappers around the in-place [`Board`] operations.
//!
//! Presentation layers hand the board over, get the transformed board back and re-render
//! from it. Every position must lie on the board, otherwise [`BoardError::InvalidCoords`]
//! is returned and the board is dropped along with the call.

use rand::Rng;

use crate::*;

/// Deals a `size × size` board with `mines` randomly placed mines.
pub fn create_board<R: Rng + ?Sized>(size: Coord, mines: CellCount, rng: &mut R) -> Result<Board> {
    let config = BoardConfig::new(size, mines)?;
    let positions = place_mines(config, rng)?;
    Board::new(config, FixedMinefieldGenerator::new(&positions))
}

pub fn open_tile(mut board: Board, coords: Coord2) -> Result<Board> {
    board.open(coords)?;
    Ok(board)
}

pub fn open_all_tiles(mut board: Board) -> Board {
    board.open_all();
    board
}

pub fn mark_tile(mut board: Board, coords: Coord2) -> Result<Board> {
    board.mark(coords)?;
    Ok(board)
}

pub fn unmark_tile(mut board: Board, coords: Coord2) -> Result<Board> {
    board.unmark(coords)?;
    Ok(board)
}

pub fn toggle_mark(mut board: Board, coords: Coord2) -> Result<Board> {
    board.toggle_mark(coords)?;
    Ok(board)
}

pub fn count_mines_around(board: &Board, coords: Coord2) -> Result<u8> {
    board.count_mines_around(coords)
}

pub fn count_opened_tiles(board: &Board) -> CellCount {
    board.count_opened_tiles()
}

pub fn is_mine(board: &Board, coords: Coord2) -> Result<bool> {
    board.is_mine(coords)
}

pub fn is_marked(board: &Board, coords: Coord2) -> Result<bool> {
    board.is_marked(coords)
}

pub fn is_opened(board: &Board, coords: Coord2) -> Result<bool> {
    board.is_opened(coords)
}
