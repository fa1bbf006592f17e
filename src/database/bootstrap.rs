use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use tracing::{error, info};

use crate::database::entities::{projects, Projects};

pub const DEFAULT_PROJECT_NAME: &str = "Default Project";

/// Make sure at least one project exists.
///
/// Failures are logged and rolled back; the server keeps starting either way.
/// Returns the created project, if one was needed.
pub async fn ensure_default_project(db: &DatabaseConnection) -> Option<projects::Model> {
    match create_default_project_if_empty(db).await {
        Ok(Some(project)) => {
            info!("Created default project with ID: {}", project.id);
            Some(project)
        }
        Ok(None) => None,
        Err(err) => {
            error!("Error creating default project: {}", err);
            None
        }
    }
}

async fn create_default_project_if_empty(
    db: &DatabaseConnection,
) -> Result<Option<projects::Model>, DbErr> {
    let txn = db.begin().await?;

    if Projects::find().count(&txn).await? > 0 {
        txn.commit().await?;
        return Ok(None);
    }

    let now = Utc::now();
    let project = projects::ActiveModel {
        name: Set(DEFAULT_PROJECT_NAME.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = project.insert(&txn).await;
    match result {
        Ok(project) => {
            txn.commit().await?;
            Ok(Some(project))
        }
        Err(err) => {
            txn.rollback().await?;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_creates_default_project_on_empty_store() {
        let db = setup_test_db().await;

        let created = ensure_default_project(&db).await.expect("project created");
        assert_eq!(created.name, DEFAULT_PROJECT_NAME);
        assert_eq!(created.created_at, created.updated_at);

        let all = Projects::find().all(&db).await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let db = setup_test_db().await;

        ensure_default_project(&db).await;
        assert!(ensure_default_project(&db).await.is_none());

        assert_eq!(Projects::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_skips_when_projects_exist() {
        let db = setup_test_db().await;
        let now = Utc::now();
        projects::ActiveModel {
            name: Set("Trip Plan".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        assert!(ensure_default_project(&db).await.is_none());

        let all = Projects::find().all(&db).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Trip Plan");
    }

    #[tokio::test]
    async fn test_failure_is_not_fatal() {
        // No migrations: the projects table is missing
        let db = crate::database::establish_connection("sqlite::memory:")
            .await
            .unwrap();

        assert!(ensure_default_project(&db).await.is_none());
    }
}
