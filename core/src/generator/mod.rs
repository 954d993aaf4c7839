use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Decides where the mines of a new board go.
pub trait MinefieldGenerator {
    /// Distinct, in-bounds mine positions for a board described by `config`.
    fn generate(self, config: BoardConfig) -> Result<Vec<Coord2>>;
}
