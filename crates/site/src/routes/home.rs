//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;

// =============================================================================
// Hero Configuration (Static content)
// =============================================================================

/// Hero banner configuration.
#[derive(Clone)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_url: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Clean water, close to home".to_string(),
            subtitle: "Brightwater Collective partners with communities to build \
                       and maintain safe water points, one neighborhood at a time."
                .to_string(),
            button_text: "See our causes".to_string(),
            button_url: "/causes".to_string(),
        }
    }
}

// =============================================================================
// Impact and Cause Highlights
// =============================================================================

/// A headline impact number for the home page.
#[derive(Clone)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

/// A cause highlight card.
#[derive(Clone)]
pub struct CauseCard {
    pub title: String,
    pub summary: String,
    pub url: String,
}

/// Static impact numbers for the home page (updated each reporting cycle).
fn impact_stats() -> Vec<StatView> {
    vec![
        StatView {
            value: "42".to_string(),
            label: "water points maintained".to_string(),
        },
        StatView {
            value: "18,000+".to_string(),
            label: "people with daily access".to_string(),
        },
        StatView {
            value: "96%".to_string(),
            label: "of donations reach the field".to_string(),
        },
    ]
}

/// Static cause highlights for the home page.
fn featured_causes() -> Vec<CauseCard> {
    vec![
        CauseCard {
            title: "Well rehabilitation".to_string(),
            summary: "Restoring broken hand pumps is the fastest, cheapest way \
                      to bring a water point back to a community."
                .to_string(),
            url: "/causes".to_string(),
        },
        CauseCard {
            title: "Rainwater harvesting".to_string(),
            summary: "Rooftop catchment systems for schools and clinics in \
                      regions where groundwater is out of reach."
                .to_string(),
            url: "/causes".to_string(),
        },
        CauseCard {
            title: "Hygiene training".to_string(),
            summary: "Local workshops that make every water point part of a \
                      lasting public-health improvement."
                .to_string(),
            url: "/causes".to_string(),
        },
    ]
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Hero banner configuration.
    pub hero: HeroConfig,
    /// Headline impact numbers.
    pub stats: Vec<StatView>,
    /// Cause highlight cards.
    pub causes: Vec<CauseCard>,
}

/// Display the home page.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        hero: HeroConfig::default(),
        stats: impact_stats(),
        causes: featured_causes(),
    }
}
