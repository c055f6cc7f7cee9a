//! Static page route handlers: about and causes.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;

/// A member of the team, shown on the about page.
#[derive(Clone)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
}

fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Amara Osei".to_string(),
            role: "Executive Director".to_string(),
            bio: "Started Brightwater after a decade of field engineering work \
                  on rural water systems."
                .to_string(),
        },
        TeamMember {
            name: "Daniel Reyes".to_string(),
            role: "Field Operations".to_string(),
            bio: "Coordinates our partner crews and keeps every water point on \
                  a maintenance schedule."
                .to_string(),
        },
        TeamMember {
            name: "Priya Nair".to_string(),
            role: "Programs & Training".to_string(),
            bio: "Designs the hygiene and stewardship workshops that travel \
                  with every installation."
                .to_string(),
        },
    ]
}

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub team: Vec<TeamMember>,
}

/// Display the about page.
#[instrument]
pub async fn about() -> impl IntoResponse {
    AboutTemplate { team: team() }
}

/// A cause, shown in full on the causes page.
#[derive(Clone)]
pub struct CauseView {
    pub title: String,
    pub description: String,
    pub status: String,
}

fn cause_list() -> Vec<CauseView> {
    vec![
        CauseView {
            title: "Well rehabilitation".to_string(),
            description: "Across our partner regions, roughly a third of hand \
                          pumps stand broken at any given time. Our crews \
                          diagnose, repair and hand each one back to a trained \
                          local water committee."
                .to_string(),
            status: "Ongoing".to_string(),
        },
        CauseView {
            title: "Rainwater harvesting".to_string(),
            description: "Where drilling is impractical we fit schools and \
                          clinics with rooftop catchment, first-flush diverters \
                          and sealed storage, sized for the dry season."
                .to_string(),
            status: "Ongoing".to_string(),
        },
        CauseView {
            title: "Hygiene training".to_string(),
            description: "Every water project ships with a workshop series for \
                          the community it serves, so the health gains of clean \
                          water actually stick."
                .to_string(),
            status: "Ongoing".to_string(),
        },
        CauseView {
            title: "Spring protection".to_string(),
            description: "Capping natural springs protects them from \
                          contamination and delivers gravity-fed water with no \
                          moving parts to maintain."
                .to_string(),
            status: "Pilot".to_string(),
        },
    ]
}

/// Causes page template.
#[derive(Template, WebTemplate)]
#[template(path = "causes.html")]
pub struct CausesTemplate {
    pub causes: Vec<CauseView>,
}

/// Display the causes page.
#[instrument]
pub async fn causes() -> impl IntoResponse {
    CausesTemplate {
        causes: cause_list(),
    }
}
