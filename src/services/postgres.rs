use crate::models::Favorite;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL client for saved favorites
///
/// The specialist roster lives in Supabase; this client maintains the
/// service's own database for per-user favorites, so a user can save a
/// specialist once and retrieve the list later.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Save a specialist as a favorite for a user
    ///
    /// Uses INSERT ... ON CONFLICT to handle duplicates gracefully.
    /// Saving an already-saved specialist just refreshes saved_at.
    pub async fn save_favorite(
        &self,
        user_id: &str,
        specialist_id: &str,
    ) -> Result<Uuid, PostgresError> {
        let query = r#"
            INSERT INTO favorites (user_id, specialist_id, saved_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id, specialist_id)
            DO UPDATE SET saved_at = EXCLUDED.saved_at
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(user_id)
            .bind(specialist_id)
            .fetch_one(&self.pool)
            .await?;

        let id: Uuid = row.get("id");

        tracing::debug!("Saved favorite: {} -> {}", user_id, specialist_id);

        Ok(id)
    }

    /// Remove a saved favorite
    ///
    /// Returns true if a record was actually removed.
    pub async fn remove_favorite(
        &self,
        user_id: &str,
        specialist_id: &str,
    ) -> Result<bool, PostgresError> {
        let query = r#"
            DELETE FROM favorites
            WHERE user_id = $1 AND specialist_id = $2
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .bind(specialist_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get all favorites saved by a user, most recent first
    pub async fn get_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, PostgresError> {
        let query = r#"
            SELECT specialist_id, saved_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY saved_at DESC
        "#;

        let rows = sqlx::query(query).bind(user_id).fetch_all(&self.pool).await?;

        let favorites: Vec<Favorite> = rows
            .iter()
            .map(|row| Favorite {
                specialist_id: row.get("specialist_id"),
                saved_at: row.get("saved_at"),
            })
            .collect();

        tracing::debug!("User {} has {} favorites", user_id, favorites.len());

        Ok(favorites)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
