//! HTTP routes over a [`SessionRegistry`].

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, put};
use minehost_core::GameConfig;
use minehost_protocol::{
    CreateGameRequest, CreateGameResponse, GameViewResponse, OpenCellRequest, OpenCellResponse,
};

use crate::{ApiError, GameId, RegistryError, SessionRegistry};

type ApiResult<T> = Result<T, ApiError>;

pub fn router(registry: Arc<SessionRegistry>) -> Router {
    Router::new()
        .route("/", put(create_game).fallback(unrouted))
        .route(
            "/{id}",
            get(get_game)
                .post(open_cell)
                .delete(delete_game)
                .fallback(unrouted),
        )
        .fallback(unrouted)
        .layer(middleware::from_fn(log_request))
        .with_state(registry)
}

/// Runs `f` on the blocking pool, so board generation and waits on a game's lock never hold an async worker.
async fn blocking<T, F>(registry: Arc<SessionRegistry>, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&SessionRegistry) -> Result<T, RegistryError> + Send + 'static,
{
    Ok(tokio::task::spawn_blocking(move || f(&registry)).await??)
}

/// Malformed ids can not name a game, so they are reported like unknown ones.
fn parse_id(raw: String) -> Result<GameId, RegistryError> {
    GameId::parse(&raw).map_err(|err| {
        log::debug!("Rejected game id {:?}: {}", raw, err);
        RegistryError::NotFound(raw)
    })
}

async fn create_game(
    State(registry): State<Arc<SessionRegistry>>,
    body: Bytes,
) -> ApiResult<Json<CreateGameResponse>> {
    let request = CreateGameRequest::from_body(&body)?;
    let config = GameConfig::from_dimensions(request.width, request.height, request.mine_count)?;
    let id = blocking(registry, move |registry| registry.create_game(config)).await?;
    Ok(Json(CreateGameResponse { id: id.to_string() }))
}

async fn get_game(
    State(registry): State<Arc<SessionRegistry>>,
    Path(id): Path<String>,
) -> ApiResult<Json<GameViewResponse>> {
    let id = parse_id(id)?;
    let view = blocking(registry, move |registry| registry.view(&id)).await?;
    Ok(Json(view))
}

async fn open_cell(
    State(registry): State<Arc<SessionRegistry>>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<OpenCellResponse>> {
    let id = parse_id(id)?;
    if body.is_empty() {
        return Err(ApiError::MissingBody);
    }
    let OpenCellRequest { x, y } = serde_json::from_slice(&body)?;
    let new_state = blocking(registry, move |registry| registry.open(&id, x, y)).await?;
    Ok(Json(OpenCellResponse { new_state }))
}

async fn delete_game(
    State(registry): State<Arc<SessionRegistry>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(id)?;
    blocking(registry, move |registry| registry.delete_game(&id)).await?;
    Ok(StatusCode::OK)
}

/// `PUT` anywhere but `/` is a bad request, anything else off the known routes names no game.
async fn unrouted(method: Method) -> ApiError {
    if method == Method::PUT {
        ApiError::CreateOutsideRoot
    } else {
        ApiError::UnknownRoute
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    log::debug!(
        "{} {} -> {} in {:?}",
        method,
        uri,
        response.status(),
        started.elapsed()
    );
    response
}
