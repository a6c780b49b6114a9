use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use hashbrown::HashMap;
use log::{debug, info};
use minehost_core::{Game, GameConfig, GameError, GameState};
use minehost_protocol::GameViewResponse;
use thiserror::Error;

use crate::GameId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Game {0} not found")]
    NotFound(String),
    #[error("Too many games in progress (limit is {0})")]
    Full(usize),
    #[error(transparent)]
    Game(#[from] GameError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// One registered game. `None` once deleted, so late moves can tell.
#[derive(Debug)]
struct Session {
    game: Mutex<Option<Game>>,
}

impl Session {
    fn lock(&self) -> MutexGuard<'_, Option<Game>> {
        // engine calls never leave a game half-updated, so a poisoned slot is still consistent
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-memory games keyed by [`GameId`].
///
/// The map has its own lock, taken only to add, find or remove a game; moves lock just the game they touch, so
/// different games never wait on each other.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    games: RwLock<HashMap<GameId, Arc<Session>>>,
    max_games: Option<usize>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_games(max_games: Option<usize>) -> Self {
        Self {
            games: Default::default(),
            max_games,
        }
    }

    /// Deals a new random board and registers it under a fresh id.
    pub fn create_game(&self, config: GameConfig) -> Result<GameId> {
        self.insert_game(Game::from_config(config))
    }

    /// Registers an existing game under a fresh id.
    pub fn insert_game(&self, game: Game) -> Result<GameId> {
        let config = game.config();
        let session = Arc::new(Session {
            game: Mutex::new(Some(game)),
        });

        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(max_games) = self.max_games
            && games.len() >= max_games
        {
            return Err(RegistryError::Full(max_games));
        }

        let mut rng = rand::rng();
        let id = loop {
            let id = GameId::random(&mut rng);
            if !games.contains_key(&id) {
                break id;
            }
        };
        games.insert(id.clone(), session);

        info!(
            "Game {} created: {}x{} with {} mines ({} active)",
            id,
            config.size.0,
            config.size.1,
            config.mines,
            games.len()
        );
        Ok(id)
    }

    /// Opens a cell. Coordinates are checked against the game's own size.
    pub fn open(&self, id: &GameId, x: i64, y: i64) -> Result<GameState> {
        let (before, after) = self.with_game(id, |game| {
            let before = game.state();
            let coords = game.config().validate_wide_coords(x, y)?;
            game.open(coords).map(|after| (before, after))
        })??;

        if before != after {
            info!("Game {} went from {} to {} at ({}, {})", id, before, after, x, y);
        } else {
            debug!("Game {} opened ({}, {}), still {}", id, x, y, after);
        }
        Ok(after)
    }

    pub fn view(&self, id: &GameId) -> Result<GameViewResponse> {
        self.with_game(id, |game| GameViewResponse::from_game(game))
    }

    pub fn delete_game(&self, id: &GameId) -> Result<()> {
        let session = self
            .games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        // waits for a move in flight, then leaves a tombstone for anyone still holding the session
        session.lock().take();
        info!("Game {} deleted", id);
        Ok(())
    }

    /// Runs `f` with exclusive access to one game.
    pub fn with_game<T>(&self, id: &GameId, f: impl FnOnce(&mut Game) -> T) -> Result<T> {
        let session = self.session(id)?;
        Self::run(&session, id, f)
    }

    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn session(&self, id: &GameId) -> Result<Arc<Session>> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    fn run<T>(session: &Session, id: &GameId, f: impl FnOnce(&mut Game) -> T) -> Result<T> {
        let mut slot = session.lock();
        let game = slot
            .as_mut()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        Ok(f(game))
    }
}
