use axum::response::Json;
use utoipa::OpenApi;

use super::error::ErrorResponse;
use super::handlers::{health, mindmaps, projects, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        projects::list_projects,
        projects::create_project,
        projects::delete_project,
        mindmaps::list_mindmaps,
        mindmaps::create_mindmap,
        mindmaps::update_mindmap,
        mindmaps::delete_mindmap,
    ),
    components(schemas(
        projects::CreateProjectRequest,
        projects::ProjectResponse,
        mindmaps::CreateMindMapRequest,
        mindmaps::UpdateMindMapRequest,
        mindmaps::MindMapResponse,
        MessageResponse,
        ErrorResponse,
    )),
    tags(
        (name = "projects", description = "Projects owning mindmaps"),
        (name = "mindmaps", description = "Mindmap graphs and autosave"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
