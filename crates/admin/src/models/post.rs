//! Post and engagement models.

use chrono::{DateTime, Utc};

use brightwater_core::{
    AdminId, PostAnalyticsId, PostId, PostStatus, SocialAccountId, SocialPlatform,
};

/// A drafted, scheduled, or published social post.
#[derive(Debug, Clone)]
pub struct Post {
    /// Unique identifier.
    pub id: PostId,
    /// Optional headline.
    pub title: Option<String>,
    /// Post body.
    pub content: String,
    /// Target platform.
    pub platform: SocialPlatform,
    /// Lifecycle status.
    pub status: PostStatus,
    /// Account the post publishes through, if chosen.
    pub social_account_id: Option<SocialAccountId>,
    /// Attached media URLs.
    pub media_urls: Vec<String>,
    /// When the post is scheduled to go out.
    pub scheduled_at: Option<DateTime<Utc>>,
    /// When the post actually went out.
    pub published_at: Option<DateTime<Utc>>,
    /// Platform-side post identifier once published.
    pub external_post_id: Option<String>,
    /// Admin who drafted the post.
    pub created_by: AdminId,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for drafting a new post.
#[derive(Debug)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: String,
    pub platform: SocialPlatform,
    pub status: PostStatus,
    pub social_account_id: Option<SocialAccountId>,
    pub media_urls: Vec<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_by: AdminId,
}

/// A point-in-time engagement snapshot for a published post.
#[derive(Debug, Clone)]
pub struct PostEngagement {
    /// Unique identifier.
    pub id: PostAnalyticsId,
    /// Post the snapshot belongs to.
    pub post_id: PostId,
    /// Platform the numbers came from.
    pub platform: SocialPlatform,
    pub impressions: i64,
    pub reach: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub clicks: i64,
    pub engagement: i64,
    /// When the snapshot was recorded.
    pub recorded_at: DateTime<Utc>,
}
