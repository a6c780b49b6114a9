use core::fmt;

use ndarray::Array2;

use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Source of mine layouts, asked once per board (re)generation.
///
/// Implementations must return an array of shape `config.size` holding exactly `config.mines` mines.
pub trait MinefieldGenerator: fmt::Debug + Send {
    fn place_mines(&mut self, config: GameConfig) -> Array2<bool>;
}
