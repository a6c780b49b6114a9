use core::fmt;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::*;

/// Reseeding attempts between two warnings while looking for a safe first move.
const REGENERATION_WARN_INTERVAL: u32 = 1000;

/// Valid transitions:
/// - NotStarted -> InProgress (first move, board reseeded until it is safe)
/// - NotStarted -> Won (first move clears the board)
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// The serialized names are the state strings existing clients expect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    #[serde(rename = "First Move")]
    NotStarted,
    #[serde(rename = "Playing")]
    InProgress,
    #[serde(rename = "Win")]
    Won,
    #[serde(rename = "Lose")]
    Lost,
}

impl GameState {
    pub const fn is_not_started(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "First Move",
            Self::InProgress => "Playing",
            Self::Won => "Win",
            Self::Lost => "Lose",
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One game: a board plus the win/loss state machine.
#[derive(Debug)]
pub struct Game {
    board: Board,
    state: GameState,
    hidden_count: CellCount,
    detonated: Option<Coord2>,
    regenerations: u32,
}

impl Game {
    /// Validates the configuration and deals a random board.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        Ok(Self::from_config(GameConfig::new(size, mines)?))
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self::with_board(Board::new(config))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_board(Board::with_seed(config, seed))
    }

    /// Starts a game on `board`. Cells it already has revealed stay revealed.
    pub fn with_board(board: Board) -> Self {
        let hidden_count = board.hidden_count();
        Self {
            board,
            state: Default::default(),
            hidden_count,
            detonated: None,
            regenerations: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn hidden_count(&self) -> CellCount {
        self.hidden_count
    }

    /// The mine that ended a lost game.
    pub fn detonated(&self) -> Option<Coord2> {
        self.detonated
    }

    /// How many times the board was reseeded to keep the first move safe.
    pub fn regenerations(&self) -> u32 {
        self.regenerations
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn view(&self) -> BoardView {
        self.board.view()
    }

    /// Opens one cell and returns the resulting state.
    ///
    /// Rejected moves leave the game untouched. Opening a cell that is already revealed is accepted and changes
    /// nothing.
    pub fn open(&mut self, coords: Coord2) -> Result<GameState> {
        let coords = self.board.config().validate_coords(coords)?;
        if self.state.is_finished() {
            return Err(GameError::AlreadyEnded);
        }

        if self.state.is_not_started() {
            self.make_first_move_safe(coords);
            self.state = GameState::InProgress;
        }

        self.reveal(coords);
        if self.board.has_mine(coords) {
            log::debug!("Mine hit at {:?}", coords);
            self.detonated = Some(coords);
            self.state = GameState::Lost;
            return Ok(self.state);
        }

        if self.board.neighbor_count(coords) == 0 {
            self.flood_fill(coords);
        }

        if self.hidden_count == self.board.mine_count() {
            self.state = GameState::Won;
        }
        Ok(self.state)
    }

    /// Reseeds until `coords` holds no mine. A full minefield has no safe cell, so it is left as is.
    fn make_first_move_safe(&mut self, coords: Coord2) {
        if self.board.config().safe_cells() == 0 {
            log::warn!("Minefield is full, first move at {:?} can not be made safe", coords);
            return;
        }

        while self.board.has_mine(coords) {
            self.board.regenerate();
            self.regenerations += 1;
            if self.regenerations % REGENERATION_WARN_INTERVAL == 0 {
                log::warn!(
                    "Still reseeding for a safe first move at {:?} after {} attempts",
                    coords,
                    self.regenerations
                );
            }
        }

        if self.regenerations > 0 {
            // reseeding hides every cell again
            self.hidden_count = self.board.hidden_count();
            log::debug!(
                "Board reseeded {} time(s) to make {:?} safe",
                self.regenerations,
                coords
            );
        }
    }

    fn reveal(&mut self, coords: Coord2) -> bool {
        let was_hidden = self.board.reveal_cell(coords);
        if was_hidden {
            self.hidden_count -= 1;
        }
        was_hidden
    }

    /// Reveals the connected zero region around `start` (already revealed) plus its numbered border.
    fn flood_fill(&mut self, start: Coord2) {
        // cells are revealed when queued, so each one is queued at most once
        let mut to_expand = VecDeque::from([start]);

        while let Some(coords) = to_expand.pop_front() {
            if self.board.neighbor_count(coords) != 0 {
                continue;
            }
            for neighbor in self.board.neighbors(coords) {
                if self.reveal(neighbor) {
                    to_expand.push_back(neighbor);
                }
            }
        }
    }
}
