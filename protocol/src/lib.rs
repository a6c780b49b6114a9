//! JSON payloads of the minehost HTTP API.
//!
//! | Method   | Path    | Request body            | Response body           |
//! |----------|---------|-------------------------|-------------------------|
//! | `PUT`    | `/`     | [`CreateGameRequest`]   | [`CreateGameResponse`]  |
//! | `GET`    | `/{id}` | none                    | [`GameViewResponse`]    |
//! | `POST`   | `/{id}` | [`OpenCellRequest`]     | [`OpenCellResponse`]    |
//! | `DELETE` | `/{id}` | none                    | none                    |
//!
//! Failures carry an [`ErrorResponse`].

use minehost_core::{BoardView, CellCount, Coord, Game, GameConfig, GameState};
use serde::{Deserialize, Serialize};

/// Board parameters for a new game. Missing fields fall back to a 10x10 board with 10 mines, and an empty body
/// is the same as `{}`.
///
/// Fields are wide integers so that out-of-range values reach validation instead of failing to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateGameRequest {
    pub width: i64,
    pub height: i64,
    pub mine_count: i64,
}

impl CreateGameRequest {
    pub fn from_body(body: &[u8]) -> serde_json::Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }
}

impl Default for CreateGameRequest {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            width: config.size.0.into(),
            height: config.size.1.into(),
            mine_count: config.mines.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameResponse {
    pub id: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenCellRequest {
    pub x: i64,
    pub y: i64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenCellResponse {
    pub new_state: GameState,
}

/// Everything a player may see of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameViewResponse {
    pub state: GameState,
    pub width: Coord,
    pub height: Coord,
    pub mine_count: CellCount,
    /// `board[x][y]`: `-1` hidden, `9` mine, otherwise the number of adjacent mines.
    pub board: Vec<Vec<i8>>,
}

impl GameViewResponse {
    pub fn from_game(game: &Game) -> Self {
        let (width, height) = game.size();
        Self {
            state: game.state(),
            width,
            height,
            mine_count: game.mine_count(),
            board: game.view().to_wire_columns(),
        }
    }

    /// Client side: decodes `board` back into cell views. `None` if it is ragged, holds an unknown cell value,
    /// or does not match `width` and `height`.
    pub fn board_view(&self) -> Option<BoardView> {
        BoardView::from_wire_columns(&self.board).filter(|view| view.size() == (self.width, self.height))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minehost_core::Board;
    use serde_json::json;

    #[test]
    fn create_request_defaults() {
        assert_eq!(
            CreateGameRequest::from_body(b"").unwrap(),
            CreateGameRequest {
                width: 10,
                height: 10,
                mine_count: 10
            }
        );
        assert_eq!(
            CreateGameRequest::from_body(br#"{"width": 4}"#).unwrap(),
            CreateGameRequest {
                width: 4,
                height: 10,
                mine_count: 10
            }
        );
        assert!(CreateGameRequest::from_body(b"{").is_err());
    }

    #[test]
    fn open_request_requires_both_coordinates() {
        assert!(serde_json::from_value::<OpenCellRequest>(json!({"x": 1})).is_err());
        assert_eq!(
            serde_json::from_value::<OpenCellRequest>(json!({"x": -1, "y": 2})).unwrap(),
            OpenCellRequest { x: -1, y: 2 }
        );
    }

    #[test]
    fn view_response_shape() {
        let mut game = Game::with_board(Board::from_mine_coords((2, 3), &[(1, 2)]).unwrap());
        game.open((0, 0)).unwrap();

        let value = serde_json::to_value(GameViewResponse::from_game(&game)).unwrap();
        assert_eq!(
            value,
            json!({
                "state": "Playing",
                "width": 2,
                "height": 3,
                "mine_count": 1,
                "board": [[0, 1, -1], [0, 1, -1]],
            })
        );
    }

    #[test]
    fn view_response_decodes_on_the_client() {
        let mut game = Game::with_board(Board::from_mine_coords((2, 3), &[(1, 2)]).unwrap());
        game.open((0, 0)).unwrap();
        let json = serde_json::to_string(&GameViewResponse::from_game(&game)).unwrap();

        let mut response: GameViewResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.board_view(), Some(game.view()));

        response.height = 4;
        assert_eq!(response.board_view(), None);
        response.height = 3;
        response.board[0][0] = 12;
        assert_eq!(response.board_view(), None);
    }

    #[test]
    fn open_response_uses_state_strings() {
        let response = OpenCellResponse {
            new_state: GameState::Won,
        };
        assert_eq!(serde_json::to_value(response).unwrap(), json!({"new_state": "Win"}));
    }
}
