//! Handlers for the `/animals` resource.

use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use shelter_core::animal::{Animal, AnimalInput, ANIMAL_ENTITY};
use shelter_core::error::CoreError;
use shelter_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Animal deleted successfully";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: ANIMAL_ENTITY,
        id,
    })
}

/// The store always assigns an id on save; a missing one is a backend bug.
fn saved_id(animal: &Animal) -> AppResult<DbId> {
    animal
        .id
        .ok_or_else(|| AppError::InternalError("store returned an animal without an id".into()))
}

/// GET /animals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Animal>>> {
    let animals = state.store.find_all().await?;
    Ok(Json(animals))
}

/// GET /animals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Animal>> {
    let animal = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(animal))
}

/// POST /animals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<AnimalInput>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<Animal>)> {
    let animal = input.into_new_animal()?;
    let saved = state.store.save(animal).await?;
    let id = saved_id(&saved)?;

    tracing::info!(animal_id = id, "Animal created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/animals/{id}"))],
        Json(saved),
    ))
}

/// PUT /animals/{id}
///
/// Only fields carrying a value in the body are overwritten.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AnimalInput>,
) -> AppResult<Json<Animal>> {
    let mut animal = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    input.apply_to(&mut animal)?;
    let saved = state.store.save(animal).await?;

    tracing::info!(animal_id = id, "Animal updated");
    Ok(Json(saved))
}

/// DELETE /animals/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !state.store.exists_by_id(id).await? {
        return Err(not_found(id));
    }
    state.store.delete_by_id(id).await?;

    tracing::info!(animal_id = id, "Animal deleted");
    Ok(Json(MessageResponse::new(DELETED_MESSAGE)))
}
