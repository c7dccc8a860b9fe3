use crate::models::{IncidentLevel, IncidentStatus, IncidentType};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Incidents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Incidents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Incidents::Status)
                            .string_len(50)
                            .not_null()
                            .check(
                                Expr::col(Incidents::Status)
                                    .is_in(IncidentStatus::ALL.map(|v| v.as_str())),
                            ),
                    )
                    .col(
                        ColumnDef::new(Incidents::IncidentType)
                            .string_len(50)
                            .null()
                            .check(
                                Expr::col(Incidents::IncidentType)
                                    .is_in(IncidentType::ALL.map(|v| v.as_str())),
                            ),
                    )
                    .col(
                        ColumnDef::new(Incidents::Level)
                            .string_len(50)
                            .null()
                            .check(
                                Expr::col(Incidents::Level)
                                    .is_in(IncidentLevel::ALL.map(|v| v.as_str())),
                            ),
                    )
                    .col(ColumnDef::new(Incidents::Message).text().null())
                    .col(
                        ColumnDef::new(Incidents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Incidents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Status page reads always filter by status
        manager
            .create_index(
                Index::create()
                    .name("idx_incidents_status")
                    .table(Incidents::Table)
                    .col(Incidents::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Incidents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Incidents {
    Table,
    Id,
    Status,
    IncidentType,
    Level,
    Message,
    CreatedAt,
    UpdatedAt,
}
