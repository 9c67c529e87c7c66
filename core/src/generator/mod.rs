use ndarray::Array2;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy for laying out mines on a board described by a validated config.
///
/// Implementations return a `rows x cols` mask with exactly `config.mines()`
/// cells set; [`Board::with_generator`] rejects any other mask.
pub trait MineGenerator {
    fn generate(self, config: &GameConfig) -> Result<Array2<bool>>;
}
