//! Seed demo posts and engagement snapshots.
//!
//! Gives a fresh install something to show on the dashboard: a week of
//! posts in assorted statuses and a few engagement snapshots for the
//! published ones. Requires at least one admin to exist (the posts need
//! a `created_by`).

use chrono::{Duration, Utc};

use brightwater_admin::db::post_analytics::NewEngagementSnapshot;
use brightwater_admin::db::{AdminRepository, PostAnalyticsRepository, PostRepository};
use brightwater_admin::models::NewPost;
use brightwater_core::{PostStatus, SocialPlatform};

use super::{CliError, connect};

/// One demo post: content, platform, status, and age in days.
struct DemoPost {
    title: &'static str,
    content: &'static str,
    platform: SocialPlatform,
    status: PostStatus,
    days_ago: i64,
}

const DEMO_POSTS: &[DemoPost] = &[
    DemoPost {
        title: "Well rehab in Kisumu complete",
        content: "The hand pump at Kisumu East primary is back in service after \
                  a full rebuild. 600 students have clean water again.",
        platform: SocialPlatform::Facebook,
        status: PostStatus::Published,
        days_ago: 6,
    },
    DemoPost {
        title: "Meet the crew",
        content: "Behind every working water point is a local committee. This \
                  week we're introducing the people who keep the taps running.",
        platform: SocialPlatform::Instagram,
        status: PostStatus::Published,
        days_ago: 4,
    },
    DemoPost {
        title: "Rain season prep",
        content: "Our rooftop catchment systems are getting their pre-season \
                  inspection. First-flush diverters cleaned, tanks sealed.",
        platform: SocialPlatform::Linkedin,
        status: PostStatus::Published,
        days_ago: 2,
    },
    DemoPost {
        title: "Volunteer day announcement",
        content: "Join us Saturday for the spring protection workday. All \
                  hands welcome, training provided.",
        platform: SocialPlatform::Twitter,
        status: PostStatus::Scheduled,
        days_ago: 1,
    },
    DemoPost {
        title: "Impact report teaser",
        content: "Draft: our annual numbers are in and they're worth sharing. \
                  Full report next week.",
        platform: SocialPlatform::Facebook,
        status: PostStatus::Draft,
        days_ago: 0,
    },
];

/// Insert demo posts and engagement snapshots.
pub async fn run() -> Result<(), CliError> {
    let pool = connect().await?;

    let admins = AdminRepository::new(&pool).list_all().await?;
    let Some(admin) = admins.first() else {
        return Err(CliError::Precondition(
            "no admin accounts exist; run 'bw-cli admin grant' first",
        ));
    };

    let posts = PostRepository::new(&pool);
    let analytics = PostAnalyticsRepository::new(&pool);
    let now = Utc::now();

    for (i, demo) in DEMO_POSTS.iter().enumerate() {
        let created = posts
            .create(&NewPost {
                title: Some(demo.title.to_string()),
                content: demo.content.to_string(),
                platform: demo.platform,
                status: demo.status,
                social_account_id: None,
                media_urls: Vec::new(),
                scheduled_at: (demo.status == PostStatus::Scheduled)
                    .then(|| now + Duration::days(1)),
                created_by: admin.id,
            })
            .await?;

        // Backdate so the dashboard histogram has a spread to show
        if demo.days_ago > 0 {
            sqlx::query("UPDATE posts SET created_at = $1 WHERE id = $2")
                .bind(now - Duration::days(demo.days_ago))
                .bind(created.id)
                .execute(&pool)
                .await?;
        }

        if demo.status == PostStatus::Published {
            let base = (i as i64 + 1) * 100;
            analytics
                .record(&NewEngagementSnapshot {
                    post_id: created.id,
                    platform: demo.platform,
                    impressions: base * 10,
                    reach: base * 7,
                    likes: base,
                    comments: base / 10,
                    shares: base / 5,
                    clicks: base / 2,
                    engagement: base + base / 5 + base / 10,
                })
                .await?;
        }

        tracing::info!(
            "Seeded post \"{}\" ({}, {})",
            demo.title,
            demo.platform,
            demo.status
        );
    }

    tracing::info!("Seeding complete: {} posts", DEMO_POSTS.len());
    Ok(())
}
