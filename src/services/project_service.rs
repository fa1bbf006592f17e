use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use crate::database::entities::{projects, Projects};
use crate::errors::{ProjectError, ProjectResult};

#[derive(Clone)]
pub struct ProjectService {
    db: DatabaseConnection,
}

impl ProjectService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List every project
    pub async fn list_projects(&self) -> ProjectResult<Vec<projects::Model>> {
        let projects = Projects::find()
            .order_by_asc(projects::Column::Id)
            .all(&self.db)
            .await?;

        Ok(projects)
    }

    /// Create a new project
    pub async fn create_project(&self, name: &str) -> ProjectResult<projects::Model> {
        let name = ProjectError::check_name(name)?;

        let now = Utc::now();
        let project = projects::ActiveModel {
            name: Set(name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let project = project.insert(&self.db).await?;
        debug!("Created project {} ({})", project.id, project.name);

        Ok(project)
    }

    /// Delete a project together with its mindmaps
    pub async fn delete_project(&self, project_id: i32) -> ProjectResult<()> {
        // Owned mindmaps go with it through the ON DELETE CASCADE foreign key
        let result = Projects::delete_by_id(project_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(ProjectError::NotFound(project_id.into()));
        }

        debug!("Deleted project {}", project_id);
        Ok(())
    }
}
