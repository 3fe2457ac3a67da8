//! JSON REST handlers for the world document.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use serde::Serialize;

use worldstore_app::ports::WorldRepository;
use worldstore_domain::error::{ValidationError, WorldStoreError};
use worldstore_domain::world::WorldDocument;

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation text returned after a successful save.
pub const SAVED_MESSAGE: &str = "World data saved successfully";

/// JSON body returned by the save endpoint.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// `GET /api/world`
pub async fn get<R>(State(state): State<AppState<R>>) -> Result<Json<WorldDocument>, ApiError>
where
    R: WorldRepository + Send + Sync + 'static,
{
    let world = state.world_service.get_world().await?;
    Ok(Json(world))
}

/// `POST /api/world`
///
/// The body is taken as raw bytes so that a rejected payload gets the same
/// `{"error": ...}` shape as every other failure. Rejected payloads are
/// client errors: 400, or 413 past the body limit. Only
/// storage failures answer 500.
pub async fn save<R>(
    State(state): State<AppState<R>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<MessageBody>, ApiError>
where
    R: WorldRepository + Send + Sync + 'static,
{
    let body = body.map_err(|rejection| WorldStoreError::from(body_error(&rejection)))?;
    let world = WorldDocument::from_submission(&body).map_err(WorldStoreError::from)?;
    state.world_service.save_world(world).await?;
    Ok(Json(MessageBody {
        message: SAVED_MESSAGE,
    }))
}

fn body_error(rejection: &BytesRejection) -> ValidationError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ValidationError::BodyTooLarge
    } else {
        ValidationError::UnreadableBody {
            reason: rejection.body_text(),
        }
    }
}
