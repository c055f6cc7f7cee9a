//! Social media platform enumeration.

use serde::{Deserialize, Serialize};

/// A supported social media platform.
///
/// Maps to the `social_platform` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "social_platform", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Youtube,
    Tiktok,
}

impl SocialPlatform {
    /// All platforms, in display order.
    pub const ALL: [Self; 6] = [
        Self::Facebook,
        Self::Instagram,
        Self::Twitter,
        Self::Linkedin,
        Self::Youtube,
        Self::Tiktok,
    ];

    /// Human-readable label, e.g. "LinkedIn".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
            Self::Youtube => "YouTube",
            Self::Tiktok => "TikTok",
        }
    }
}

impl std::fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Facebook => write!(f, "facebook"),
            Self::Instagram => write!(f, "instagram"),
            Self::Twitter => write!(f, "twitter"),
            Self::Linkedin => write!(f, "linkedin"),
            Self::Youtube => write!(f, "youtube"),
            Self::Tiktok => write!(f, "tiktok"),
        }
    }
}

impl std::str::FromStr for SocialPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(Self::Facebook),
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "youtube" => Ok(Self::Youtube),
            "tiktok" => Ok(Self::Tiktok),
            _ => Err(format!("invalid social platform: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_from_str_roundtrip() {
        for platform in SocialPlatform::ALL {
            let parsed: SocialPlatform = platform.to_string().parse().unwrap();
            assert_eq!(parsed, platform);
        }
    }

    #[test]
    fn test_unknown_platform_rejected() {
        assert!("mastodon".parse::<SocialPlatform>().is_err());
    }
}
