pub mod app;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;

use anyhow::Result;
use clap::Subcommand;
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use tracing::info;

use crate::database::{
    bootstrap::ensure_default_project, connection::*, migrations::Migrator,
};

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

pub async fn start_server(port: u16, database_path: &str, cors_origin: Option<&str>) -> Result<()> {
    ensure_parent_dir(database_path)?;

    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    // Create tables if absent
    setup_database(&db).await?;
    info!("Database schema ready");

    ensure_default_project(&db).await;

    let app = app::create_app(db, cors_origin).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

fn ensure_parent_dir(database_path: &str) -> Result<()> {
    if database_path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = Path::new(database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  GET    /api/health                 - Health check");
    info!("  GET    /api/openapi.json           - OpenAPI document");
    info!("  GET    /api/projects               - List projects");
    info!("  POST   /api/projects               - Create project");
    info!("  DELETE /api/projects/:id           - Delete project and its mindmaps");
    info!("  GET    /api/mindmaps?project_id=   - List mindmaps");
    info!("  POST   /api/mindmaps               - Create mindmap");
    info!("  PUT    /api/mindmaps/:id           - Save mindmap");
    info!("  DELETE /api/mindmaps/:id           - Delete mindmap");
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    ensure_parent_dir(database_path)?;

    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_parent_dir_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/brainmap.db");

        ensure_parent_dir(path.to_str().unwrap()).unwrap();
        assert!(dir.path().join("nested/deeper").is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_accepts_bare_file_names() {
        ensure_parent_dir("brainmap.db").unwrap();
        ensure_parent_dir(":memory:").unwrap();
    }

    #[tokio::test]
    async fn test_migrate_fresh_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maps.db");
        let path = path.to_str().unwrap();

        migrate_database(path, MigrateDirection::Up).await.unwrap();
        migrate_database(path, MigrateDirection::Fresh).await.unwrap();
        migrate_database(path, MigrateDirection::Down).await.unwrap();
    }
}
