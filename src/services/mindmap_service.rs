use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde_json::Value;
use tracing::debug;

use crate::database::entities::{mindmaps, MindMaps};
use crate::errors::{MindMapError, MindMapResult};

/// Fields for a new mindmap
#[derive(Debug, Clone)]
pub struct NewMindMap {
    pub project_id: i32,
    pub name: String,
    pub data: Option<Value>,
}

/// Partial update; `None` leaves the stored field as is
#[derive(Debug, Clone, Default)]
pub struct MindMapUpdate {
    pub name: Option<String>,
    pub data: Option<Value>,
}

#[derive(Clone)]
pub struct MindMapService {
    db: DatabaseConnection,
}

impl MindMapService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List mindmaps, optionally only those owned by one project
    pub async fn list_mindmaps(&self, project_id: Option<i32>) -> MindMapResult<Vec<mindmaps::Model>> {
        let mut query = MindMaps::find();
        if let Some(project_id) = project_id {
            query = query.filter(mindmaps::Column::ProjectId.eq(project_id));
        }

        let mindmaps = query
            .order_by_asc(mindmaps::Column::Id)
            .all(&self.db)
            .await?;

        Ok(mindmaps)
    }

    /// Create a new mindmap.
    ///
    /// The owning project is not looked up first; a dangling `project_id`
    /// is rejected by the foreign key and reported as `ProjectNotFound`.
    pub async fn create_mindmap(&self, new: NewMindMap) -> MindMapResult<mindmaps::Model> {
        MindMapError::check_name(&new.name)?;

        let data = new.data.unwrap_or_else(mindmaps::empty_graph);
        let now = Utc::now();
        let mindmap = mindmaps::ActiveModel {
            project_id: Set(new.project_id),
            name: Set(new.name),
            data: Set(serde_json::to_string(&data)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let mindmap = mindmap
            .insert(&self.db)
            .await
            .map_err(|err| MindMapError::from_insert(err, new.project_id))?;
        debug!(
            "Created mindmap {} in project {}",
            mindmap.id, mindmap.project_id
        );

        Ok(mindmap)
    }

    /// Overwrite the fields present in `update` (the autosave path)
    pub async fn update_mindmap(
        &self,
        mindmap_id: i32,
        update: MindMapUpdate,
    ) -> MindMapResult<mindmaps::Model> {
        if let Some(name) = &update.name {
            MindMapError::check_name(name)?;
        }
        let data = update.data.as_ref().map(serde_json::to_string).transpose()?;

        let txn = self.db.begin().await?;

        let mindmap = MindMaps::find_by_id(mindmap_id)
            .one(&txn)
            .await?
            .ok_or(MindMapError::NotFound(mindmap_id.into()))?;

        // Never let a clock step backwards move updated_at below its last value
        let updated_at = Utc::now().max(mindmap.updated_at);

        let mut mindmap: mindmaps::ActiveModel = mindmap.into();
        if let Some(name) = update.name {
            mindmap.name = Set(name);
        }
        if let Some(data) = data {
            mindmap.data = Set(data);
        }
        mindmap.updated_at = Set(updated_at);

        let mindmap = mindmap.update(&txn).await?;
        txn.commit().await?;

        Ok(mindmap)
    }

    /// Delete a mindmap
    pub async fn delete_mindmap(&self, mindmap_id: i32) -> MindMapResult<()> {
        let result = MindMaps::delete_by_id(mindmap_id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(MindMapError::NotFound(mindmap_id.into()));
        }

        debug!("Deleted mindmap {}", mindmap_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ProjectService;
    use sea_orm::DatabaseConnection;
    use serde_json::json;

    async fn setup() -> (DatabaseConnection, MindMapService, i32) {
        let db = crate::database::test_utils::setup_test_db().await;
        let project = ProjectService::new(db.clone())
            .create_project("Trip Plan")
            .await
            .unwrap();
        let service = MindMapService::new(db.clone());
        (db, service, project.id)
    }

    fn new_map(project_id: i32, name: &str, data: Option<Value>) -> NewMindMap {
        NewMindMap {
            project_id,
            name: name.to_string(),
            data,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_to_empty_graph() {
        let (_db, service, project_id) = setup().await;

        let mindmap = service
            .create_mindmap(new_map(project_id, "Map1", None))
            .await
            .unwrap();

        assert_eq!(mindmap.graph_data().unwrap(), json!({"nodes": [], "edges": []}));
        assert_eq!(mindmap.created_at, mindmap.updated_at);
    }

    #[tokio::test]
    async fn test_data_round_trips() {
        let (_db, service, project_id) = setup().await;
        let data = json!({
            "nodes": [{"id": "1", "position": {"x": 1.5, "y": -2}, "data": {"label": "Root"}}],
            "edges": [{"id": "e1-2", "source": "1", "target": "2", "animated": true}],
            "viewport": null
        });

        service
            .create_mindmap(new_map(project_id, "Map1", Some(data.clone())))
            .await
            .unwrap();

        let listed = service.list_mindmaps(Some(project_id)).await.unwrap();
        assert_eq!(listed[0].graph_data().unwrap(), data);
    }

    #[tokio::test]
    async fn test_create_with_unknown_project_fails() {
        let (_db, service, project_id) = setup().await;

        let err = service
            .create_mindmap(new_map(project_id + 100, "Orphan", None))
            .await
            .unwrap_err();

        assert!(matches!(err, MindMapError::ProjectNotFound(id) if id == project_id + 100));
        assert!(service.list_mindmaps(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_name_keeps_data() {
        let (_db, service, project_id) = setup().await;
        let data = json!({"nodes": [{"id": 1}], "edges": []});
        let created = service
            .create_mindmap(new_map(project_id, "Map1", Some(data.clone())))
            .await
            .unwrap();

        let updated = service
            .update_mindmap(
                created.id,
                MindMapUpdate {
                    name: Some("Renamed".to_string()),
                    data: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.graph_data().unwrap(), data);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_data_keeps_name() {
        let (_db, service, project_id) = setup().await;
        let created = service
            .create_mindmap(new_map(project_id, "Map1", None))
            .await
            .unwrap();

        let data = json!({"nodes": [{"id": 1}], "edges": []});
        let updated = service
            .update_mindmap(
                created.id,
                MindMapUpdate {
                    name: None,
                    data: Some(data.clone()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Map1");
        assert_eq!(updated.graph_data().unwrap(), data);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_empty_update_only_touches_timestamp() {
        let (_db, service, project_id) = setup().await;
        let data = json!({"nodes": [{"id": "a"}], "edges": []});
        let created = service
            .create_mindmap(new_map(project_id, "Map1", Some(data.clone())))
            .await
            .unwrap();

        let updated = service
            .update_mindmap(created.id, MindMapUpdate::default())
            .await
            .unwrap();

        assert_eq!(updated.name, "Map1");
        assert_eq!(updated.graph_data().unwrap(), data);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_mindmap() {
        let (_db, service, _project_id) = setup().await;

        let err = service
            .update_mindmap(42, MindMapUpdate::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_filters_by_project() {
        let (db, service, first) = setup().await;
        let second = ProjectService::new(db)
            .create_project("Other")
            .await
            .unwrap()
            .id;

        service.create_mindmap(new_map(first, "A", None)).await.unwrap();
        service.create_mindmap(new_map(second, "B", None)).await.unwrap();
        service.create_mindmap(new_map(first, "C", None)).await.unwrap();

        let names = |maps: Vec<mindmaps::Model>| -> Vec<String> {
            maps.into_iter().map(|m| m.name).collect()
        };
        assert_eq!(names(service.list_mindmaps(Some(first)).await.unwrap()), vec!["A", "C"]);
        assert_eq!(names(service.list_mindmaps(Some(second)).await.unwrap()), vec!["B"]);
        assert_eq!(service.list_mindmaps(None).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_deleting_project_cascades() {
        let (db, service, first) = setup().await;
        let projects = ProjectService::new(db);
        let second = projects.create_project("Other").await.unwrap().id;

        service.create_mindmap(new_map(first, "A", None)).await.unwrap();
        service.create_mindmap(new_map(second, "B", None)).await.unwrap();

        projects.delete_project(first).await.unwrap();

        assert!(service.list_mindmaps(Some(first)).await.unwrap().is_empty());
        let remaining = service.list_mindmaps(None).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].project_id, second);
    }

    #[tokio::test]
    async fn test_delete_mindmap() {
        let (_db, service, project_id) = setup().await;
        let created = service
            .create_mindmap(new_map(project_id, "Map1", None))
            .await
            .unwrap();

        service.delete_mindmap(created.id).await.unwrap();
        assert!(service.delete_mindmap(created.id).await.unwrap_err().is_not_found());
        assert!(service.list_mindmaps(None).await.unwrap().is_empty());
    }
}
