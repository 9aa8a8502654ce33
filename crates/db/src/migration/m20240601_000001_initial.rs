//! Initial schema: student records and named id sequences.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS estudiantes CASCADE; DROP TABLE IF EXISTS sequences CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Named counters; value is the last id handed out
CREATE TABLE sequences (
    name TEXT PRIMARY KEY,
    value BIGINT NOT NULL DEFAULT 0
);

-- Student records; id comes from the 'estudiantes' sequence, never reused
CREATE TABLE estudiantes (
    id BIGINT PRIMARY KEY,
    nombre TEXT NOT NULL,
    edad TEXT NOT NULL,
    dni TEXT NOT NULL,
    telefono TEXT NOT NULL,
    grado TEXT NOT NULL,
    imagen TEXT,
    imagen_url TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";
