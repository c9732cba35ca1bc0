//! Table bootstrap for the `bookmarks` table

use sqlx::PgPool;

/// Create the `bookmarks` table if it does not exist yet.
///
/// Idempotent; safe to call on every startup.
pub async fn ensure(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring bookmarks table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookmarks (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            rating NUMERIC NOT NULL CHECK (rating >= 1 AND rating <= 5),
            description TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
