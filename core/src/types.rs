/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-tile counts.
pub type CellCount = u16;

/// Two-dimensional position `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

/// Converts a position into the row-major `[row, column]` index used by the tile grid.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Every surrounding tile, used for mine counting.
const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Left, right, down, up. Cascading never goes diagonal.
const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), size: Coord) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= size {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= size {
        return None;
    }

    Some((next_x, next_y))
}

/// Whether `coords` lies on a square board of side `size`.
pub const fn in_bounds(coords: Coord2, size: Coord) -> bool {
    coords.0 < size && coords.1 < size
}

/// Iterates the in-bounds positions around a center tile.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    size: Coord,
    displacements: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    /// All 8 surrounding positions, diagonals included.
    pub fn around(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            displacements: &DISPLACEMENTS,
            index: 0,
        }
    }

    /// Only the 4 orthogonal positions.
    pub fn orthogonal(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            displacements: &ORTHOGONAL,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.displacements.get(usize::from(self.index))?;
            self.index += 1;

            let next_item = apply_delta(self.center, delta, self.size);
            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
