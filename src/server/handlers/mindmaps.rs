use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use super::MessageResponse;
use crate::database::entities::mindmaps;
use crate::errors::MindMapError;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::extract::{AppJson, AppPath, AppQuery};
use crate::services::{MindMapUpdate, NewMindMap};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MindMapQuery {
    /// Only return mindmaps owned by this project; a non-integer value is ignored
    pub project_id: Option<String>,
}

impl MindMapQuery {
    pub fn project_filter(&self) -> Option<i32> {
        self.project_id
            .as_deref()
            .and_then(|id| id.trim().parse().ok())
    }
}

fn mindmap_id(id: i64) -> Result<i32, MindMapError> {
    // No stored row can have an id outside the i32 key range
    i32::try_from(id).map_err(|_| MindMapError::NotFound(id))
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateMindMapRequest {
    pub project_id: i32,
    pub name: String,
    /// Graph document; defaults to `{"nodes": [], "edges": []}`
    #[schema(value_type = Object)]
    pub data: Option<Value>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateMindMapRequest {
    pub name: Option<String>,
    #[schema(value_type = Object)]
    pub data: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MindMapResponse {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    #[schema(value_type = Object)]
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<mindmaps::Model> for MindMapResponse {
    type Error = MindMapError;

    fn try_from(mindmap: mindmaps::Model) -> Result<Self, Self::Error> {
        let data = mindmap.graph_data()?;
        Ok(Self {
            id: mindmap.id,
            project_id: mindmap.project_id,
            name: mindmap.name,
            data,
            created_at: mindmap.created_at,
            updated_at: mindmap.updated_at,
        })
    }
}

#[utoipa::path(
    get,
    path = "/api/mindmaps",
    tag = "mindmaps",
    params(MindMapQuery),
    responses(
        (status = 200, description = "List mindmaps", body = [MindMapResponse])
    )
)]
pub async fn list_mindmaps(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MindMapQuery>,
) -> Result<Json<Vec<MindMapResponse>>, ApiError> {
    let mindmaps = state
        .mindmaps
        .list_mindmaps(query.project_filter())
        .await?
        .into_iter()
        .map(MindMapResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(mindmaps))
}

#[utoipa::path(
    post,
    path = "/api/mindmaps",
    tag = "mindmaps",
    request_body = CreateMindMapRequest,
    responses(
        (status = 201, description = "Mindmap created successfully", body = MindMapResponse),
        (status = 400, description = "Missing field, invalid name or unknown project", body = crate::server::error::ErrorResponse)
    )
)]
pub async fn create_mindmap(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMindMapRequest>,
) -> Result<(StatusCode, Json<MindMapResponse>), ApiError> {
    let mindmap = state
        .mindmaps
        .create_mindmap(NewMindMap {
            project_id: payload.project_id,
            name: payload.name,
            data: payload.data,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(mindmap.try_into()?)))
}

#[utoipa::path(
    put,
    path = "/api/mindmaps/{id}",
    tag = "mindmaps",
    params(
        ("id" = i64, Path, description = "Mindmap ID")
    ),
    request_body = UpdateMindMapRequest,
    responses(
        (status = 200, description = "Mindmap saved", body = MindMapResponse),
        (status = 404, description = "Mindmap not found", body = crate::server::error::ErrorResponse)
    )
)]
pub async fn update_mindmap(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateMindMapRequest>,
) -> Result<Json<MindMapResponse>, ApiError> {
    let mindmap = state
        .mindmaps
        .update_mindmap(
            mindmap_id(id)?,
            MindMapUpdate {
                name: payload.name,
                data: payload.data,
            },
        )
        .await?;

    Ok(Json(mindmap.try_into()?))
}

#[utoipa::path(
    delete,
    path = "/api/mindmaps/{id}",
    tag = "mindmaps",
    params(
        ("id" = i64, Path, description = "Mindmap ID")
    ),
    responses(
        (status = 200, description = "Mindmap deleted", body = MessageResponse),
        (status = 404, description = "Mindmap not found", body = crate::server::error::ErrorResponse)
    )
)]
pub async fn delete_mindmap(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.mindmaps.delete_mindmap(mindmap_id(id)?).await?;

    Ok(Json(MessageResponse::new("Mindmap deleted")))
}
