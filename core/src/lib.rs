//! Minesweeper engine: board generation, the safe first move, cascading reveals and the win/loss state machine.
//!
//! The engine is synchronous and owns no session concept; callers that share a [`Game`] across threads must
//! serialize access to it themselves.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod board;
mod error;
mod game;
mod generator;
mod types;
mod view;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidSize);
        }
        let cells = total_cells(size);
        if mines > cells {
            return Err(GameError::TooManyMines {
                mines: mines.into(),
                cells: cells.into(),
            });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    /// Validates dimensions coming from a wider integer source, such as a JSON request.
    pub fn from_dimensions(width: i64, height: i64, mines: i64) -> Result<Self> {
        let width = Coord::try_from(width).map_err(|_| GameError::InvalidSize)?;
        let height = Coord::try_from(height).map_err(|_| GameError::InvalidSize)?;
        if width == 0 || height == 0 {
            return Err(GameError::InvalidSize);
        }
        if mines < 0 {
            return Err(GameError::NegativeMines);
        }
        let cells = total_cells((width, height));
        let mines = CellCount::try_from(mines)
            .ok()
            .filter(|&mines| mines <= cells)
            .ok_or(GameError::TooManyMines {
                mines: mines.unsigned_abs(),
                cells: cells.into(),
            })?;
        Self::new((width, height), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        total_cells(self.size)
    }

    /// Cells without a mine. Zero for an over-full unchecked config.
    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Like [`GameConfig::validate_coords`] for coordinates that may be negative or wider than [`Coord`].
    pub fn validate_wide_coords(&self, x: i64, y: i64) -> Result<Coord2> {
        let x = Coord::try_from(x).map_err(|_| GameError::OutOfBounds)?;
        let y = Coord::try_from(y).map_err(|_| GameError::OutOfBounds)?;
        self.validate_coords((x, y))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((10, 10), 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_boards() {
        assert_eq!(GameConfig::new((0, 5), 0), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new((5, 0), 0), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_allows_full_and_empty_minefields() {
        assert!(GameConfig::new((3, 3), 9).is_ok());
        assert!(GameConfig::new((1, 1), 0).is_ok());
        assert_eq!(
            GameConfig::new((3, 3), 10),
            Err(GameError::TooManyMines { mines: 10, cells: 9 })
        );
    }

    #[test]
    fn wide_dimensions_are_range_checked() {
        assert_eq!(
            GameConfig::from_dimensions(10, 10, 10),
            Ok(GameConfig::default())
        );
        assert_eq!(
            GameConfig::from_dimensions(-1, 10, 0),
            Err(GameError::InvalidSize)
        );
        assert_eq!(
            GameConfig::from_dimensions(256, 10, 0),
            Err(GameError::InvalidSize)
        );
        assert_eq!(
            GameConfig::from_dimensions(2, 2, -3),
            Err(GameError::NegativeMines)
        );
        assert_eq!(
            GameConfig::from_dimensions(2, 2, 100_000),
            Err(GameError::TooManyMines {
                mines: 100_000,
                cells: 4
            })
        );
        assert!(GameError::InvalidSize.is_config_error());
        assert!(!GameError::OutOfBounds.is_config_error());
    }

    #[test]
    fn safe_cells_never_underflow() {
        assert_eq!(GameConfig::default().safe_cells(), 90);
        assert_eq!(GameConfig::new_unchecked((3, 3), 9).safe_cells(), 0);
        assert_eq!(GameConfig::new_unchecked((2, 2), 7).safe_cells(), 0);
    }

    #[test]
    fn wide_coords_are_range_checked() {
        let config = GameConfig::default();
        assert_eq!(config.validate_wide_coords(9, 0), Ok((9, 0)));
        assert_eq!(config.validate_wide_coords(10, 0), Err(GameError::OutOfBounds));
        assert_eq!(config.validate_wide_coords(0, -1), Err(GameError::OutOfBounds));
        assert_eq!(config.validate_wide_coords(1 << 40, 0), Err(GameError::OutOfBounds));
    }
}
