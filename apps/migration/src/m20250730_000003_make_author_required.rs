//! Make author required. Pre-existing null authors are backfilled with a
//! sentinel before the constraint lands; new writes always carry a real
//! author, so the backfill is a one-time concern.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("UPDATE post SET author = 'Unknown Author' WHERE author IS NULL")
            .await?;

        db.execute_unprepared("ALTER TABLE post ALTER COLUMN author SET NOT NULL")
            .await?;

        db.execute_unprepared(
            "ALTER TABLE post ADD CONSTRAINT author_not_empty CHECK (length(trim(author)) > 0)",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("ALTER TABLE post DROP CONSTRAINT author_not_empty")
            .await?;
        db.execute_unprepared("ALTER TABLE post ALTER COLUMN author DROP NOT NULL")
            .await?;

        Ok(())
    }
}
