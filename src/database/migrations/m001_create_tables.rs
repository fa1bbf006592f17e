use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Projects::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Projects::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create mindmaps table
        manager
            .create_table(
                Table::create()
                    .table(Mindmaps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Mindmaps::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Mindmaps::ProjectId).integer().not_null())
                    .col(ColumnDef::new(Mindmaps::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Mindmaps::Data).text().not_null())
                    .col(ColumnDef::new(Mindmaps::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Mindmaps::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mindmaps_project_id")
                            .from(Mindmaps::Table, Mindmaps::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mindmaps_project_id")
                    .table(Mindmaps::Table)
                    .col(Mindmaps::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mindmaps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Mindmaps {
    Table,
    Id,
    ProjectId,
    Name,
    Data,
    CreatedAt,
    UpdatedAt,
}
