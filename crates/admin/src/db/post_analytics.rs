//! Post engagement snapshot repository.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use brightwater_core::{PostAnalyticsId, PostId, SocialPlatform};

use super::RepositoryError;
use crate::models::PostEngagement;

/// Internal row type for `PostgreSQL` engagement queries.
#[derive(Debug, sqlx::FromRow)]
struct PostEngagementRow {
    id: Uuid,
    post_id: Uuid,
    platform: SocialPlatform,
    impressions: i64,
    reach: i64,
    likes: i64,
    comments: i64,
    shares: i64,
    clicks: i64,
    engagement: i64,
    recorded_at: DateTime<Utc>,
}

const ENGAGEMENT_COLUMNS: &str = "id, post_id, platform, impressions, reach, likes, comments, \
                                  shares, clicks, engagement, recorded_at";

impl From<PostEngagementRow> for PostEngagement {
    fn from(row: PostEngagementRow) -> Self {
        Self {
            id: PostAnalyticsId::new(row.id),
            post_id: PostId::new(row.post_id),
            platform: row.platform,
            impressions: row.impressions,
            reach: row.reach,
            likes: row.likes,
            comments: row.comments,
            shares: row.shares,
            clicks: row.clicks,
            engagement: row.engagement,
            recorded_at: row.recorded_at,
        }
    }
}

/// A new engagement snapshot to record.
#[derive(Debug)]
pub struct NewEngagementSnapshot {
    pub post_id: PostId,
    pub platform: SocialPlatform,
    pub impressions: i64,
    pub reach: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub clicks: i64,
    pub engagement: i64,
}

/// Repository for post engagement snapshots.
pub struct PostAnalyticsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PostAnalyticsRepository<'a> {
    /// Create a new analytics repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a new snapshot, returning the created row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn record(
        &self,
        snapshot: &NewEngagementSnapshot,
    ) -> Result<PostEngagement, RepositoryError> {
        let row = sqlx::query_as::<_, PostEngagementRow>(&format!(
            "INSERT INTO post_analytics
                 (post_id, platform, impressions, reach, likes, comments, shares,
                  clicks, engagement)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {ENGAGEMENT_COLUMNS}"
        ))
        .bind(snapshot.post_id)
        .bind(snapshot.platform)
        .bind(snapshot.impressions)
        .bind(snapshot.reach)
        .bind(snapshot.likes)
        .bind(snapshot.comments)
        .bind(snapshot.shares)
        .bind(snapshot.clicks)
        .bind(snapshot.engagement)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Snapshots for a post, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_post(
        &self,
        post_id: PostId,
    ) -> Result<Vec<PostEngagement>, RepositoryError> {
        let rows = sqlx::query_as::<_, PostEngagementRow>(&format!(
            "SELECT {ENGAGEMENT_COLUMNS} FROM post_analytics
             WHERE post_id = $1 ORDER BY recorded_at DESC"
        ))
        .bind(post_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Total number of recorded snapshots.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_all(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM post_analytics")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
