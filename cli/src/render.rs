use std::fmt::{self, Display, Formatter, Write};

use mineboard_core::{Board, Tile, TileContent, TileStatus};

/// Text rendering of a board, one character per tile with column and row numbers.
pub struct BoardView<'a>(pub &'a Board);

fn tile_char(tile: &Tile) -> char {
    match (tile.status, tile.content) {
        (TileStatus::Hidden, _) => '#',
        (TileStatus::Marked, _) => '!',
        (TileStatus::Mine, _) | (TileStatus::Opened, TileContent::Mine) => '*',
        (TileStatus::Opened, TileContent::Count(0)) => '.',
        (TileStatus::Opened, TileContent::Count(count)) => {
            char::from_digit(count.into(), 10).unwrap_or('?')
        }
    }
}

impl Display for BoardView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let width = board.size().saturating_sub(1).to_string().len();

        write!(f, "{:width$} ", "")?;
        for x in 0..board.size() {
            write!(f, "{}", x % 10)?;
        }
        writeln!(f)?;

        for (y, row) in board.rows().enumerate() {
            write!(f, "{y:>width$} ")?;
            for tile in row {
                f.write_char(tile_char(tile))?;
            }
            writeln!(f)?;
        }

        write!(f, "Mines left: {}", board.mines_left())
    }
}
