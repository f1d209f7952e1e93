//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::{Education, Experience, Skill};
use crate::resume::validation::{
    validate_payload, EDUCATION_FIELDS, EXPERIENCE_FIELDS, SKILL_FIELDS,
};
use crate::state::AppState;
use crate::store::Collection;

/// Optional `index` query parameter. Kept as raw text so a malformed value
/// surfaces as this service's own 400 body instead of Axum's rejection.
#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub index: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: usize,
}

/// GET /resume/experience
pub async fn get_experience(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
) -> Result<Response, AppError> {
    read_resource(&state.store.experience, params, "experience").await
}

/// POST /resume/experience
pub async fn post_experience(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    append_resource::<Experience>(&state.store.experience, payload, EXPERIENCE_FIELDS, "experience")
        .await
}

/// GET /resume/education
pub async fn get_education(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
) -> Result<Response, AppError> {
    read_resource(&state.store.education, params, "education").await
}

/// POST /resume/education
pub async fn post_education(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    append_resource::<Education>(&state.store.education, payload, EDUCATION_FIELDS, "education")
        .await
}

/// GET /resume/skill
pub async fn get_skill(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
) -> Result<Response, AppError> {
    read_resource(&state.store.skill, params, "skill").await
}

/// POST /resume/skill
pub async fn post_skill(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    append_resource::<Skill>(&state.store.skill, payload, SKILL_FIELDS, "skill").await
}

/// Returns the full sequence, or the single record at `index` when given.
///
/// A non-numeric `index` is a 400; a numeric one past the end is a 404.
async fn read_resource<T>(
    collection: &Collection<T>,
    params: IndexQuery,
    resource: &str,
) -> Result<Response, AppError>
where
    T: Clone + Serialize,
{
    match params.index {
        Some(raw) => {
            let index = raw
                .parse::<usize>()
                .map_err(|_| AppError::Validation("Invalid index".to_string()))?;
            let record = collection.get(index).await.ok_or_else(|| {
                AppError::NotFound(format!("No {resource} entry at index {index}"))
            })?;
            Ok(Json(record).into_response())
        }
        None => Ok(Json(collection.list().await).into_response()),
    }
}

/// Validates `payload` against the resource schema, appends the record, and
/// returns the position it was stored at.
async fn append_resource<T>(
    collection: &Collection<T>,
    payload: Result<Json<Value>, JsonRejection>,
    required: &[&str],
    resource: &str,
) -> Result<Json<CreatedResponse>, AppError>
where
    T: Clone + DeserializeOwned,
{
    let Json(payload) = payload
        .map_err(|_| AppError::Validation("Request data is not valid JSON".to_string()))?;

    validate_payload(&payload, required)?;

    // Validation guarantees every schema field is a string; this only trips
    // if the schema table and the model struct drift apart.
    let record: T = serde_json::from_value(payload)
        .map_err(|_| AppError::Validation("Some fields have incorrect type".to_string()))?;

    let id = collection.append(record).await;
    info!("Appended {resource} record at position {id}");

    Ok(Json(CreatedResponse { id }))
}
