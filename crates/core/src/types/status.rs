//! Post lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a [`Post`](crate::PostId).
///
/// Maps to the `post_status` PostgreSQL enum. The intended lifecycle is
/// draft → scheduled → published, with any state able to fall into failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "post_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
    Failed,
}

impl PostStatus {
    /// Whether a transition from `self` to `next` follows the lifecycle.
    ///
    /// Admits draft → scheduled, scheduled → published, and any → failed.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Scheduled)
                | (Self::Scheduled, Self::Published)
                | (_, Self::Failed)
        )
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Scheduled => write!(f, "scheduled"),
            Self::Published => write!(f, "published"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "published" => Ok(Self::Published),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("invalid post status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_transitions() {
        assert!(PostStatus::Draft.can_transition_to(PostStatus::Scheduled));
        assert!(PostStatus::Scheduled.can_transition_to(PostStatus::Published));

        // Any state may fail
        assert!(PostStatus::Draft.can_transition_to(PostStatus::Failed));
        assert!(PostStatus::Scheduled.can_transition_to(PostStatus::Failed));
        assert!(PostStatus::Published.can_transition_to(PostStatus::Failed));
    }

    #[test]
    fn test_rejected_transitions() {
        assert!(!PostStatus::Draft.can_transition_to(PostStatus::Published));
        assert!(!PostStatus::Published.can_transition_to(PostStatus::Draft));
        assert!(!PostStatus::Published.can_transition_to(PostStatus::Scheduled));
        assert!(!PostStatus::Failed.can_transition_to(PostStatus::Published));
    }
}
