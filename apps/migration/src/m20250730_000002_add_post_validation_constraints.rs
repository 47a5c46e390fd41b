//! Tighten title and content: NOT NULL, length bounds, and non-blank check
//! constraints mirroring the application validation.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            "ALTER TABLE post \
             ALTER COLUMN title TYPE VARCHAR(200), \
             ALTER COLUMN title SET NOT NULL",
        )
        .await?;

        db.execute_unprepared(
            "ALTER TABLE post \
             ALTER COLUMN content TYPE VARCHAR(10000), \
             ALTER COLUMN content SET NOT NULL",
        )
        .await?;

        db.execute_unprepared("ALTER TABLE post ALTER COLUMN author TYPE VARCHAR(100)")
            .await?;

        db.execute_unprepared(
            "ALTER TABLE post ADD CONSTRAINT title_not_empty CHECK (length(trim(title)) > 0)",
        )
        .await?;

        db.execute_unprepared(
            "ALTER TABLE post ADD CONSTRAINT content_not_empty CHECK (length(trim(content)) > 0)",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("ALTER TABLE post DROP CONSTRAINT title_not_empty")
            .await?;
        db.execute_unprepared("ALTER TABLE post DROP CONSTRAINT content_not_empty")
            .await?;

        db.execute_unprepared(
            "ALTER TABLE post \
             ALTER COLUMN title TYPE TEXT, \
             ALTER COLUMN title DROP NOT NULL",
        )
        .await?;
        db.execute_unprepared(
            "ALTER TABLE post \
             ALTER COLUMN content TYPE TEXT, \
             ALTER COLUMN content DROP NOT NULL",
        )
        .await?;
        db.execute_unprepared("ALTER TABLE post ALTER COLUMN author TYPE TEXT")
            .await?;

        Ok(())
    }
}
