use sea_orm_migration::{prelude::*, schema::*};

static IDX_APPLICANT_CREATED_AT: &str = "idx_applicant_created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applicant::Table)
                    .if_not_exists()
                    .col(pk_auto(Applicant::Id))
                    .col(string(Applicant::Name))
                    .col(string(Applicant::Email))
                    .col(string(Applicant::Phone))
                    .col(string(Applicant::Position))
                    .col(text(Applicant::ResumeUrl))
                    .col(timestamp(Applicant::CreatedAt))
                    .col(timestamp(Applicant::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_APPLICANT_CREATED_AT)
                    .table(Applicant::Table)
                    .col(Applicant::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICANT_CREATED_AT)
                    .table(Applicant::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Applicant::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Applicant {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Position,
    ResumeUrl,
    CreatedAt,
    UpdatedAt,
}
