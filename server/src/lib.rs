//! HTTP server hosting many concurrent minesweeper games.
//!
//! Games live in memory in a [`SessionRegistry`] and are addressed by an eight-letter [`GameId`].
//! [`router`] exposes them over a small JSON API described in `minehost_protocol`.

mod api;
mod config;
mod error;
mod game_id;
mod registry;

pub use api::router;
pub use config::ServerConfig;
pub use error::ApiError;
pub use game_id::{GAME_ID_ALPHABET, GAME_ID_LEN, GameId, GameIdError};
pub use registry::{RegistryError, SessionRegistry};
