use sea_orm_migration::{prelude::*, sea_orm::DbBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Replaces any existing table of the same name.
        let mut drop_existing = Table::drop();
        drop_existing.table(Things::Table).if_exists();
        if manager.get_database_backend() == DbBackend::Postgres {
            drop_existing.cascade();
        }
        manager.drop_table(drop_existing).await?;

        manager
            .create_table(
                Table::create()
                    .table(Things::Table)
                    .col(
                        ColumnDef::new(Things::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Things::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Things::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Things::Name)
                            .string()
                            .null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Things::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Things {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
