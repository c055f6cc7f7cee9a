//! Dashboard route handler.
//!
//! Overview statistics for every admin: post totals, active social
//! accounts, and a 7-day posting activity histogram.

use askama::Template;
use axum::{extract::State, response::Html};
use chrono::{NaiveDate, Utc};
use tracing::instrument;

use brightwater_core::PostStatus;

use crate::{
    db::{PostRepository, SocialAccountRepository, posts::PostStat},
    filters,
    middleware::RequireAdmin,
    state::AppState,
};

use super::NavView;

/// One day of the posting activity histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    /// Short weekday label, e.g. "Mon".
    pub label: String,
    /// Posts created on that day.
    pub count: usize,
}

/// Histogram bucket with bar geometry for the template.
#[derive(Debug, Clone)]
pub struct DayBucketView {
    pub label: String,
    pub count: usize,
    /// Bar height as a percentage of the busiest day.
    pub bar_pct: usize,
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    nav: NavView,
    total_posts: usize,
    scheduled_posts: usize,
    active_accounts: i64,
    activity: Vec<DayBucketView>,
}

/// Bucket post creation days into the last 7 calendar days.
///
/// Returns exactly 7 buckets, oldest first, ending with `today`. Days
/// with no posts appear with a zero count.
pub(crate) fn activity_histogram(days: &[NaiveDate], today: NaiveDate) -> Vec<DayBucket> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = today - chrono::Duration::days(offset);
            DayBucket {
                label: day.format("%a").to_string(),
                count: days.iter().filter(|d| **d == day).count(),
            }
        })
        .collect()
}

/// Scale buckets to bar percentages relative to the busiest day.
fn to_bar_views(buckets: Vec<DayBucket>) -> Vec<DayBucketView> {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    buckets
        .into_iter()
        .map(|b| DayBucketView {
            bar_pct: b.count * 100 / max,
            label: b.label,
            count: b.count,
        })
        .collect()
}

/// Dashboard page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> Html<String> {
    let post_repo = PostRepository::new(state.pool());
    let account_repo = SocialAccountRepository::new(state.pool());

    let (stats_result, accounts_result) =
        tokio::join!(post_repo.stats(), account_repo.count_active());

    let stats: Vec<PostStat> = match stats_result {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch post stats");
            vec![]
        }
    };

    let active_accounts = match accounts_result {
        Ok(count) => count,
        Err(e) => {
            tracing::error!(error = %e, "Failed to count social accounts");
            0
        }
    };

    let total_posts = stats.len();
    let scheduled_posts = stats
        .iter()
        .filter(|s| s.status == PostStatus::Scheduled)
        .count();

    // Day boundaries are UTC calendar dates; the panel reports in UTC.
    let today = Utc::now().date_naive();
    let days: Vec<NaiveDate> = stats.iter().map(|s| s.created_at.date_naive()).collect();
    let activity = to_bar_views(activity_histogram(&days, today));

    let template = DashboardTemplate {
        nav: NavView::new(&admin, "/"),
        total_posts,
        scheduled_posts,
        active_accounts,
        activity,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_histogram_has_seven_buckets_oldest_first() {
        let today = date(2025, 6, 8);
        let buckets = activity_histogram(&[], today);

        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].label, date(2025, 6, 2).format("%a").to_string());
        assert_eq!(buckets[6].label, "Sun"); // 2025-06-08 is a Sunday
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_histogram_counts_posts_per_day() {
        let today = date(2025, 6, 8);
        let days = vec![
            date(2025, 6, 8),
            date(2025, 6, 8),
            date(2025, 6, 6),
            // Outside the window, must not count
            date(2025, 6, 1),
            date(2025, 5, 8),
        ];

        let buckets = activity_histogram(&days, today);

        assert_eq!(buckets[6].count, 2); // today
        assert_eq!(buckets[4].count, 1); // two days ago
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_histogram_same_calendar_day_only() {
        // A post from exactly one week before today lands outside
        let today = date(2025, 6, 8);
        let buckets = activity_histogram(&[date(2025, 6, 1)], today);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_bar_views_scale_to_busiest_day() {
        let buckets = vec![
            DayBucket {
                label: "Mon".into(),
                count: 1,
            },
            DayBucket {
                label: "Tue".into(),
                count: 4,
            },
        ];

        let views = to_bar_views(buckets);
        assert_eq!(views[0].bar_pct, 25);
        assert_eq!(views[1].bar_pct, 100);
    }

    #[test]
    fn test_bar_views_all_zero_days() {
        let buckets = activity_histogram(&[], date(2025, 6, 8));
        let views = to_bar_views(buckets);
        assert!(views.iter().all(|v| v.bar_pct == 0));
    }
}
