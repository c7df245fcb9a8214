//! Schema bootstrap for contacts service
//!
//! A single idempotent step that ensures the `contacts` table exists.

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_contacts::Migration)]
    }
}

mod m20250101_000001_create_contacts {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Contacts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Contacts::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Contacts::FirstName).string().not_null())
                        .col(ColumnDef::new(Contacts::LastName).string().not_null())
                        .col(ColumnDef::new(Contacts::Email).string().not_null())
                        .col(ColumnDef::new(Contacts::Birthday).date().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_contacts_email")
                        .table(Contacts::Table)
                        .col(Contacts::Email)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Contacts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Contacts {
        Table,
        Id,
        FirstName,
        LastName,
        Email,
        Birthday,
    }
}
