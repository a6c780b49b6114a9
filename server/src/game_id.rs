use std::fmt;

use rand::prelude::*;
use thiserror::Error;

pub const GAME_ID_LEN: usize = 8;
pub const GAME_ID_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Handle clients use to address one game: eight uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn parse(value: &str) -> Result<Self, GameIdError> {
        if value.len() != GAME_ID_LEN {
            return Err(GameIdError::InvalidLength {
                expected: GAME_ID_LEN,
                found: value.len(),
            });
        }
        if let Some((index, ch)) = value
            .chars()
            .enumerate()
            .find(|&(_, ch)| !GAME_ID_ALPHABET.contains(ch))
        {
            return Err(GameIdError::InvalidCharacter { ch, index });
        }
        Ok(Self(value.to_string()))
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let alphabet = GAME_ID_ALPHABET.as_bytes();
        let id = (0..GAME_ID_LEN)
            .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for GameId {
    type Err = GameIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameIdError {
    #[error("game id must be {expected} chars, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("invalid character '{ch}' at position {index}")]
    InvalidCharacter { ch: char, index: usize },
}
