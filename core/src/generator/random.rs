use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::*;

/// Purely random placement. The first tile a player opens may well be a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: BoardConfig) -> Result<Vec<Coord2>> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        place_mines(config, &mut rng)
    }
}

/// Rejection sampling: draw a random position and retry when it already holds a mine.
/// Fails with [`BoardError::TooManyMines`] when `config` leaves no safe tile.
pub fn place_mines<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<Vec<Coord2>> {
    let BoardConfig { size, mines } = BoardConfig::new(config.size, config.mines)?;

    let mut taken: Array2<bool> = Array2::default((usize::from(size), usize::from(size)));
    let mut positions = Vec::with_capacity(usize::from(mines));
    let mut draws: u32 = 0;

    while positions.len() < usize::from(mines) {
        draws += 1;
        let coords: Coord2 = (rng.random_range(0..size), rng.random_range(0..size));
        let slot = &mut taken[coords.to_nd_index()];
        if !*slot {
            *slot = true;
            positions.push(coords);
        }
    }

    log::debug!(
        "Placed {} mines on a {}x{} board in {} draws",
        mines,
        size,
        size,
        draws
    );
    Ok(positions)
}
