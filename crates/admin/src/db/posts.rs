//! Post repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use brightwater_core::{AdminId, PostId, PostStatus, SocialAccountId, SocialPlatform};

use super::RepositoryError;
use crate::models::{NewPost, Post};

/// Internal row type for `PostgreSQL` post queries.
#[derive(Debug, sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    title: Option<String>,
    content: String,
    platform: SocialPlatform,
    status: PostStatus,
    social_account_id: Option<Uuid>,
    media_urls: Option<Vec<String>>,
    scheduled_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    external_post_id: Option<String>,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

const POST_COLUMNS: &str = "id, title, content, platform, status, social_account_id, media_urls, \
                            scheduled_at, published_at, external_post_id, created_by, created_at, \
                            updated_at";

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId::new(row.id),
            title: row.title,
            content: row.content,
            platform: row.platform,
            status: row.status,
            social_account_id: row.social_account_id.map(SocialAccountId::new),
            media_urls: row.media_urls.unwrap_or_default(),
            scheduled_at: row.scheduled_at,
            published_at: row.published_at,
            external_post_id: row.external_post_id,
            created_by: AdminId::new(row.created_by),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// A minimal projection used by the dashboard statistics.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostStat {
    /// Lifecycle status of the post.
    pub status: PostStatus,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// Repository for post database operations.
pub struct PostRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new post repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Fetch the status and creation time of every post.
    ///
    /// The dashboard derives its totals and the 7-day activity histogram
    /// from this projection instead of loading full rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn stats(&self) -> Result<Vec<PostStat>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostStat>("SELECT status, created_at FROM posts")
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Draft a new post, returning the created row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, post: &NewPost) -> Result<Post, RepositoryError> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts
                 (title, content, platform, status, social_account_id, media_urls,
                  scheduled_at, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(post.title.as_deref())
        .bind(&post.content)
        .bind(post.platform)
        .bind(post.status)
        .bind(post.social_account_id)
        .bind(&post.media_urls)
        .bind(post.scheduled_at)
        .bind(post.created_by)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
