//! Analytics route handler.
//!
//! Engagement dashboards are not built yet; the page shows how many
//! snapshots have been recorded so analytics admins can see data is
//! flowing.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tracing::instrument;

use brightwater_core::policy::PanelSection;

use crate::{
    db::PostAnalyticsRepository, error::AppError, filters, middleware::RequireAdmin,
    state::AppState,
};

use super::NavView;

/// Analytics page template.
#[derive(Template)]
#[template(path = "analytics.html")]
struct AnalyticsTemplate {
    nav: NavView,
    snapshot_count: i64,
}

/// Analytics page.
///
/// GET /analytics
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if !admin.can_access(PanelSection::Analytics) {
        return Err(AppError::Forbidden(
            "your role cannot view analytics".to_string(),
        ));
    }

    let repo = PostAnalyticsRepository::new(state.pool());
    let snapshot_count = repo.count_all().await?;

    let template = AnalyticsTemplate {
        nav: NavView::new(&admin, "/analytics"),
        snapshot_count,
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}
