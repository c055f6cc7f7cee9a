//! Posts route handler.
//!
//! Scheduling and publishing are not built yet; this page lists what
//! exists so content admins can see the pipeline state.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tracing::instrument;

use brightwater_core::policy::PanelSection;

use crate::{
    db::PostRepository, error::AppError, filters, middleware::RequireAdmin, models::Post,
    state::AppState,
};

use super::NavView;

/// Post list item for templates.
#[derive(Debug, Clone)]
pub struct PostListItem {
    pub title: String,
    pub platform_label: String,
    pub status: String,
    pub created_on: String,
}

impl From<&Post> for PostListItem {
    fn from(post: &Post) -> Self {
        Self {
            title: post
                .title
                .clone()
                .unwrap_or_else(|| truncate(&post.content, 60)),
            platform_label: post.platform.label().to_string(),
            status: post.status.to_string(),
            created_on: post.created_at.format("%b %e, %Y").to_string(),
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let cut: String = s.chars().take(max_chars).collect();
    format!("{cut}…")
}

/// Posts page template.
#[derive(Template)]
#[template(path = "posts.html")]
struct PostsTemplate {
    nav: NavView,
    posts: Vec<PostListItem>,
}

/// Posts page.
///
/// GET /posts
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if !admin.can_access(PanelSection::Posts) {
        return Err(AppError::Forbidden(
            "your role cannot view posts".to_string(),
        ));
    }

    let repo = PostRepository::new(state.pool());
    let posts = repo.list_all().await?;

    let template = PostsTemplate {
        nav: NavView::new(&admin, "/posts"),
        posts: posts.iter().map(PostListItem::from).collect(),
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 60), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = "a".repeat(100);
        let out = truncate(&long, 60);
        assert_eq!(out.chars().count(), 61);
        assert!(out.ends_with('…'));
    }
}
