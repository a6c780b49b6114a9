use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must be at least 1x1 and at most 255x255")]
    InvalidSize,
    #[error("There can not be more mines than cells (got {mines} mines and {cells} total cells)")]
    TooManyMines { mines: u64, cells: u64 },
    #[error("Mine count can not be negative")]
    NegativeMines,
    #[error("Scripted layouts must share one board size and mine count")]
    LayoutMismatch,
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Errors raised while validating a board configuration; no game exists afterwards.
    pub const fn is_config_error(self) -> bool {
        matches!(self, Self::InvalidSize | Self::NegativeMines | Self::TooManyMines { .. })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
