use anyhow::{anyhow, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health, mindmaps, projects};
use super::openapi;
use crate::services::{MindMapService, ProjectService};

#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectService,
    pub mindmaps: MindMapService,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            projects: ProjectService::new(db.clone()),
            mindmaps: MindMapService::new(db),
        }
    }
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState::new(db);

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors = match cors_origin {
        Some(origin) if origin != "*" => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods(methods)
            .allow_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
    };

    let app = Router::new()
        .nest("/api", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    Ok(app)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        // Project routes
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/projects/:id", delete(projects::delete_project))
        // Mindmap routes
        .route(
            "/mindmaps",
            get(mindmaps::list_mindmaps).post(mindmaps::create_mindmap),
        )
        .route(
            "/mindmaps/:id",
            put(mindmaps::update_mindmap).delete(mindmaps::delete_mindmap),
        )
}
